//! Stress-tested assets, liabilities and surplus of an account.

use crate::config::ProtocolParams;
use crate::domain::{
    Liabilities, PairDecimals, Portfolio, QuoteToken, RiskParameters, SqrtPriceX96,
};
use crate::math::{sqrt_price_to_price, sqrt_price_to_tick};
use crate::solvency::{compute_probe_prices, ProbePrices};

/// Everything derived from one evaluation of an account.
///
/// Values are in human units; `*_a` / `*_b` figures are denominated in
/// token1 at the respective probe price.  The record is ephemeral and
/// recomputed on every call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolvencyBasics {
    /// Probe sqrt prices and the scaler that produced them.
    pub probes: ProbePrices,
    /// Human price of token0 in token1 at probe A.
    pub price_a: f64,
    /// Human price of token0 in token1 at probe B.
    pub price_b: f64,
    /// Collateral value at probe A.
    pub assets_a: f64,
    /// Collateral value at probe B.
    pub assets_b: f64,
    /// Effective liabilities at probe A.
    pub liabilities_a: f64,
    /// Effective liabilities at probe B.
    pub liabilities_b: f64,
    /// `assets_a - liabilities_a`.
    pub surplus_a: f64,
    /// `assets_b - liabilities_b`.
    pub surplus_b: f64,
    /// Token0 debt not covered by token0 holdings at the mean price.
    pub shortfall0: f64,
    /// Token1 debt not covered by token1 holdings at the mean price.
    pub shortfall1: f64,
    /// Token0 holdings beyond token0 debt at the mean price.
    pub surplus0_c: f64,
    /// Token1 holdings beyond token1 debt at the mean price.
    pub surplus1_c: f64,
    /// Fixed token0 balance.
    pub fixed0: f64,
    /// Fixed token1 balance.
    pub fixed1: f64,
}

/// Values `portfolio` against `liabilities` at both probe prices.
///
/// Liquidity positions are valued at the ticks of probe A, probe B and the
/// mean price.  Any debt not covered by same-token holdings at the mean
/// price is a shortfall, which inflates the effective liability by
/// `shortfall / liquidation_incentive` on top of the leverage factor.
///
/// # Errors
///
/// Propagates overflow from the liquidity math; an underwater account is
/// not an error.
pub fn compute_solvency_basics(
    portfolio: &Portfolio,
    liabilities: &Liabilities,
    mean: SqrtPriceX96,
    risk: &RiskParameters,
    decimals: PairDecimals,
    params: &ProtocolParams,
) -> crate::error::Result<SolvencyBasics> {
    let probes = compute_probe_prices(mean, risk, params);
    let price_a = sqrt_price_to_price(probes.a(), decimals, QuoteToken::Token1)?.get();
    let price_b = sqrt_price_to_price(probes.b(), decimals, QuoteToken::Token1)?.get();

    let tick_a = sqrt_price_to_tick(probes.a())?;
    let tick_b = sqrt_price_to_tick(probes.b())?;
    let tick_c = sqrt_price_to_tick(mean)?;

    let fluid1_a = portfolio.liquidity_value_in_token1(tick_a, decimals)?;
    let fluid1_b = portfolio.liquidity_value_in_token1(tick_b, decimals)?;
    let (holdings0, holdings1) = portfolio.total_amounts(tick_c, decimals)?;

    let fixed0 = portfolio.assets().fixed0();
    let fixed1 = portfolio.assets().fixed1();

    let shortfall0 = (liabilities.amount0() - holdings0).max(0.0);
    let shortfall1 = (liabilities.amount1() - holdings1).max(0.0);
    let surplus0_c = (holdings0 - liabilities.amount0()).max(0.0);
    let surplus1_c = (holdings1 - liabilities.amount1()).max(0.0);

    let leverage = params.leverage_factor();
    let incentive = params.liquidation_incentive();
    let effective0 = liabilities.amount0() * leverage + shortfall0 / incentive;
    let effective1 = liabilities.amount1() * leverage + shortfall1 / incentive;

    let liabilities_a = effective1 + effective0 * price_a;
    let liabilities_b = effective1 + effective0 * price_b;
    let assets_a = fluid1_a + fixed1 + fixed0 * price_a;
    let assets_b = fluid1_b + fixed1 + fixed0 * price_b;

    Ok(SolvencyBasics {
        probes,
        price_a,
        price_b,
        assets_a,
        assets_b,
        liabilities_a,
        liabilities_b,
        surplus_a: assets_a - liabilities_a,
        surplus_b: assets_b - liabilities_b,
        shortfall0,
        shortfall1,
        surplus0_c,
        surplus1_c,
        fixed0,
        fixed1,
    })
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{Assets, Liquidity, Tick, UniswapPosition};

    fn decimals() -> PairDecimals {
        let Ok(d) = PairDecimals::try_from_raw(18, 18) else {
            panic!("valid decimals");
        };
        d
    }

    fn basics(portfolio: &Portfolio, liabilities: &Liabilities) -> SolvencyBasics {
        let Ok(b) = compute_solvency_basics(
            portfolio,
            liabilities,
            SqrtPriceX96::ONE,
            &RiskParameters::new(0.5, 4.0),
            decimals(),
            &ProtocolParams::default(),
        ) else {
            panic!("expected Ok");
        };
        b
    }

    #[test]
    fn symmetric_account() {
        let Ok(assets) = Assets::new(1000.0, 1000.0) else {
            panic!("valid assets");
        };
        let Ok(liabilities) = Liabilities::new(400.0, 0.0) else {
            panic!("valid liabilities");
        };
        let b = basics(&Portfolio::from_assets(assets), &liabilities);
        let e2 = 2f64.exp();
        assert!((b.price_a - 1.0 / e2).abs() < 1e-12);
        assert!((b.price_b - e2).abs() < 1e-12);
        assert!((b.liabilities_a - 402.0 / e2).abs() < 1e-9);
        assert!((b.assets_b - (1000.0 + 1000.0 * e2)).abs() < 1e-8);
        assert_eq!(b.shortfall0, 0.0);
        assert!((b.surplus0_c - 600.0).abs() < 1e-12);
        assert!((b.surplus1_c - 1000.0).abs() < 1e-12);
    }

    #[test]
    fn shortfall_inflates_liabilities() {
        let Ok(assets) = Assets::new(100.0, 0.0) else {
            panic!("valid assets");
        };
        let Ok(liabilities) = Liabilities::new(0.0, 50.0) else {
            panic!("valid liabilities");
        };
        let b = basics(&Portfolio::from_assets(assets), &liabilities);
        assert!((b.shortfall1 - 50.0).abs() < 1e-12);
        assert_eq!(b.surplus1_c, 0.0);
        let expected = 50.0 * 1.005 + 50.0 / 20.0;
        assert!((b.liabilities_a - expected).abs() < 1e-9);
        assert!((b.liabilities_b - expected).abs() < 1e-9);
    }

    #[test]
    fn liquidity_counts_as_collateral() {
        let Ok(lower) = Tick::new(-1_000) else {
            panic!("valid tick");
        };
        let Ok(upper) = Tick::new(1_000) else {
            panic!("valid tick");
        };
        let position = UniswapPosition::new(lower, upper, Liquidity::new(10u128.pow(21)));
        let portfolio = Portfolio::new(Assets::ZERO, vec![position]);
        let b = basics(&portfolio, &Liabilities::ZERO);
        assert!(b.assets_a > 0.0);
        assert!(b.assets_b > 0.0);
        assert!(b.surplus0_c > 0.0 && b.surplus1_c > 0.0);
        assert_eq!(b.fixed0, 0.0);
    }
}
