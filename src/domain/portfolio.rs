//! Everything an account holds as collateral.

use super::{Assets, PairDecimals, QuoteToken, Tick, UniswapPosition};
use crate::math::{amounts_for_liquidity, tick_to_price, value_of_liquidity_in_token1};

/// Fixed balances plus zero or more concentrated-liquidity positions.
///
/// The valuation routines always consider the two together.  Positions with
/// zero liquidity are kept as given; they value to zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Portfolio {
    assets: Assets,
    positions: Vec<UniswapPosition>,
}

impl Portfolio {
    /// Bundles balances and positions.
    #[must_use]
    pub const fn new(assets: Assets, positions: Vec<UniswapPosition>) -> Self {
        Self { assets, positions }
    }

    /// A portfolio without liquidity positions.
    #[must_use]
    pub const fn from_assets(assets: Assets) -> Self {
        Self {
            assets,
            positions: Vec::new(),
        }
    }

    /// Fixed token balances.
    #[must_use]
    pub const fn assets(&self) -> &Assets {
        &self.assets
    }

    /// Liquidity positions.
    #[must_use]
    pub fn positions(&self) -> &[UniswapPosition] {
        &self.positions
    }

    /// Token0 and token1 held at `current_tick`, fixed balances included.
    ///
    /// # Errors
    ///
    /// Propagates [`SolvencyError::Overflow`](crate::error::SolvencyError::Overflow)
    /// from the liquidity math.
    pub fn total_amounts(
        &self,
        current_tick: Tick,
        decimals: PairDecimals,
    ) -> crate::error::Result<(f64, f64)> {
        let mut amount0 = self.assets.fixed0();
        let mut amount1 = self.assets.fixed1();
        for position in &self.positions {
            let (fluid0, fluid1) = amounts_for_liquidity(position, current_tick, decimals)?;
            amount0 += fluid0;
            amount1 += fluid1;
        }
        Ok((amount0, amount1))
    }

    /// Value of the liquidity positions alone at `current_tick`, in token1.
    ///
    /// # Errors
    ///
    /// Propagates errors from the liquidity math.
    pub fn liquidity_value_in_token1(
        &self,
        current_tick: Tick,
        decimals: PairDecimals,
    ) -> crate::error::Result<f64> {
        self.positions.iter().try_fold(0.0, |total, position| {
            Ok(total + value_of_liquidity_in_token1(position, current_tick, decimals.token1())?)
        })
    }

    /// Total value at `current_tick`, denominated in token1.
    ///
    /// # Errors
    ///
    /// Propagates errors from tick/price conversion and liquidity math.
    pub fn value_in_token1(
        &self,
        current_tick: Tick,
        decimals: PairDecimals,
    ) -> crate::error::Result<f64> {
        let price = tick_to_price(current_tick, decimals, QuoteToken::Token1)?;
        let fluid = self.liquidity_value_in_token1(current_tick, decimals)?;
        Ok(fluid + self.assets.fixed1() + self.assets.fixed0() * price.get())
    }
}
