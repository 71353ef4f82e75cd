//! Fixed token balances and debts of a margin account.

use core::fmt;

use super::PairDecimals;
use crate::error::SolvencyError;

/// Largest balance or debt accepted per token, in human units.
///
/// Keeps `amount * price` finite at every representable sqrt price and
/// decimal pairing, so valuations never reach infinity.
pub const MAX_AMOUNT: f64 = 1e30;

fn check_amount(value: f64, context: &'static str) -> crate::error::Result<f64> {
    if !value.is_finite() || !(0.0..=MAX_AMOUNT).contains(&value) {
        return Err(SolvencyError::InvalidAmount(context));
    }
    Ok(value)
}

/// Raw (non-liquidity) token balances held by an account, in human units.
///
/// # Examples
///
/// ```
/// use solvency_engine::domain::Assets;
///
/// let assets = Assets::new(1_000.0, 250.5).expect("valid balances");
/// assert_eq!(assets.fixed1(), 250.5);
/// assert!(Assets::new(-1.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Assets {
    fixed0: f64,
    fixed1: f64,
}

impl Assets {
    /// No balances.
    pub const ZERO: Self = Self {
        fixed0: 0.0,
        fixed1: 0.0,
    };

    /// Creates validated balances.
    ///
    /// # Errors
    ///
    /// Returns [`SolvencyError::InvalidAmount`] if either balance is
    /// negative, NaN or above [`MAX_AMOUNT`].
    pub fn new(fixed0: f64, fixed1: f64) -> crate::error::Result<Self> {
        let fixed0 = check_amount(fixed0, "fixed0 must be within 0..=MAX_AMOUNT")?;
        let fixed1 = check_amount(fixed1, "fixed1 must be within 0..=MAX_AMOUNT")?;
        Ok(Self { fixed0, fixed1 })
    }

    /// Builds balances from smallest-unit integers.
    ///
    /// # Errors
    ///
    /// Returns [`SolvencyError::InvalidAmount`] if either amount exceeds
    /// [`MAX_AMOUNT`] once scaled to human units.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_raw(raw0: u128, raw1: u128, decimals: PairDecimals) -> crate::error::Result<Self> {
        Self::new(
            decimals.token0().to_human_f64(raw0 as f64),
            decimals.token1().to_human_f64(raw1 as f64),
        )
    }

    /// Balance of token0.
    #[must_use]
    pub const fn fixed0(&self) -> f64 {
        self.fixed0
    }

    /// Balance of token1.
    #[must_use]
    pub const fn fixed1(&self) -> f64 {
        self.fixed1
    }
}

impl fmt::Display for Assets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Assets(fixed0={}, fixed1={})", self.fixed0, self.fixed1)
    }
}

/// Amounts owed by an account, per token, in human units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Liabilities {
    amount0: f64,
    amount1: f64,
}

impl Liabilities {
    /// No debt.
    pub const ZERO: Self = Self {
        amount0: 0.0,
        amount1: 0.0,
    };

    /// Creates validated liabilities.
    ///
    /// # Errors
    ///
    /// Returns [`SolvencyError::InvalidAmount`] if either amount is
    /// negative, NaN or above [`MAX_AMOUNT`].
    pub fn new(amount0: f64, amount1: f64) -> crate::error::Result<Self> {
        let amount0 = check_amount(amount0, "amount0 must be within 0..=MAX_AMOUNT")?;
        let amount1 = check_amount(amount1, "amount1 must be within 0..=MAX_AMOUNT")?;
        Ok(Self { amount0, amount1 })
    }

    /// Builds liabilities from smallest-unit integers.
    ///
    /// # Errors
    ///
    /// Returns [`SolvencyError::InvalidAmount`] if either amount exceeds
    /// [`MAX_AMOUNT`] once scaled to human units.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_raw(raw0: u128, raw1: u128, decimals: PairDecimals) -> crate::error::Result<Self> {
        Self::new(
            decimals.token0().to_human_f64(raw0 as f64),
            decimals.token1().to_human_f64(raw1 as f64),
        )
    }

    /// Debt in token0.
    #[must_use]
    pub const fn amount0(&self) -> f64 {
        self.amount0
    }

    /// Debt in token1.
    #[must_use]
    pub const fn amount1(&self) -> f64 {
        self.amount1
    }

    /// Returns `true` if nothing is owed.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount0 == 0.0 && self.amount1 == 0.0
    }
}

impl fmt::Display for Liabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Liabilities(amount0={}, amount1={})",
            self.amount0, self.amount1
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn assets_valid() {
        let Ok(a) = Assets::new(1.0, 2.0) else {
            panic!("expected Ok");
        };
        assert!((a.fixed0() - 1.0).abs() < f64::EPSILON);
        assert!((a.fixed1() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn assets_reject_bad_values() {
        assert!(Assets::new(f64::NAN, 0.0).is_err());
        assert!(Assets::new(0.0, f64::INFINITY).is_err());
        let Err(e) = Assets::new(0.0, -0.5) else {
            panic!("expected Err");
        };
        assert_eq!(
            e,
            SolvencyError::InvalidAmount("fixed1 must be within 0..=MAX_AMOUNT")
        );
    }

    #[test]
    fn liabilities_reject_bad_values() {
        assert!(Liabilities::new(-1.0, 0.0).is_err());
        assert!(Liabilities::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn liabilities_zero() {
        assert!(Liabilities::ZERO.is_zero());
        let Ok(l) = Liabilities::new(0.0, 1e-9) else {
            panic!("expected Ok");
        };
        assert!(!l.is_zero());
    }

    #[test]
    fn from_raw_scales_by_decimals() {
        let Ok(decimals) = PairDecimals::try_from_raw(6, 18) else {
            panic!("expected Ok");
        };
        let Ok(a) = Assets::from_raw(1_500_000, 2_000_000_000_000_000_000, decimals) else {
            panic!("expected Ok");
        };
        assert!((a.fixed0() - 1.5).abs() < 1e-12);
        assert!((a.fixed1() - 2.0).abs() < 1e-12);
        let Ok(l) = Liabilities::from_raw(500_000, 0, decimals) else {
            panic!("expected Ok");
        };
        assert!((l.amount0() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn amounts_above_ceiling_are_rejected() {
        assert!(Assets::new(MAX_AMOUNT, MAX_AMOUNT).is_ok());
        assert!(Liabilities::new(MAX_AMOUNT, 0.0).is_ok());
        assert_eq!(
            Assets::new(1e300, 0.0),
            Err(SolvencyError::InvalidAmount("fixed0 must be within 0..=MAX_AMOUNT"))
        );
        assert!(Liabilities::new(0.0, MAX_AMOUNT * 2.0).is_err());

        // u128::MAX with zero decimals is about 3.4e38 units.
        let Ok(decimals) = PairDecimals::try_from_raw(0, 18) else {
            panic!("expected Ok");
        };
        assert!(Assets::from_raw(u128::MAX, 0, decimals).is_err());
        assert!(Liabilities::from_raw(0, u128::MAX, decimals).is_ok());
    }

    #[test]
    fn negative_zero_is_accepted() {
        assert!(Assets::new(-0.0, 0.0).is_ok());
    }
}
