//! Token decimal places.

use alloy_primitives::U256;

use crate::error::SolvencyError;
use crate::math::u256_to_f64;

/// Maximum allowed decimal places (EVM standard).
const MAX_DECIMALS: u8 = 18;

/// Number of decimal places of a token's smallest unit.
///
/// Valid range is `0..=18`.  Construction is validated: values above 18
/// are rejected.
///
/// # Examples
///
/// ```
/// use solvency_engine::domain::Decimals;
///
/// let d = Decimals::new(6).expect("6 is valid");
/// assert_eq!(d.get(), 6);
/// assert!((d.to_human_f64(1_500_000.0) - 1.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Maximum standard decimal places (18).
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`SolvencyError::InvalidDecimals`] if `value` exceeds 18.
    pub const fn new(value: u8) -> crate::error::Result<Self> {
        if value > MAX_DECIMALS {
            return Err(SolvencyError::InvalidDecimals("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals` as `f64` (exact for every valid value).
    #[must_use]
    pub fn factor(&self) -> f64 {
        10f64.powi(i32::from(self.0))
    }

    /// Converts a raw smallest-unit amount into human units.
    #[must_use]
    pub fn to_human(&self, raw: U256) -> f64 {
        self.to_human_f64(u256_to_f64(raw))
    }

    /// Converts a raw amount already held as `f64` into human units.
    #[must_use]
    pub fn to_human_f64(&self, raw: f64) -> f64 {
        raw / self.factor()
    }
}

/// Decimal counts of a market's two tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PairDecimals {
    token0: Decimals,
    token1: Decimals,
}

impl PairDecimals {
    /// Pairs two validated decimal counts.
    #[must_use]
    pub const fn new(token0: Decimals, token1: Decimals) -> Self {
        Self { token0, token1 }
    }

    /// Validates and pairs two raw decimal counts.
    ///
    /// # Errors
    ///
    /// Returns [`SolvencyError::InvalidDecimals`] if either exceeds 18.
    pub const fn try_from_raw(token0: u8, token1: u8) -> crate::error::Result<Self> {
        let token0 = match Decimals::new(token0) {
            Ok(d) => d,
            Err(e) => return Err(e),
        };
        let token1 = match Decimals::new(token1) {
            Ok(d) => d,
            Err(e) => return Err(e),
        };
        Ok(Self { token0, token1 })
    }

    /// Decimals of token0.
    #[must_use]
    pub const fn token0(&self) -> Decimals {
        self.token0
    }

    /// Decimals of token1.
    #[must_use]
    pub const fn token1(&self) -> Decimals {
        self.token1
    }

    /// `10^(decimals0 - decimals1)`: converts a raw token1/token0 ratio
    /// into a human one.
    #[must_use]
    pub fn price_scale(&self) -> f64 {
        10f64.powi(i32::from(self.token0.get()) - i32::from(self.token1.get()))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn valid_range() {
        for v in [0u8, 6, 8, 18] {
            let Ok(d) = Decimals::new(v) else {
                panic!("expected Ok for {v}");
            };
            assert_eq!(d.get(), v);
        }
    }

    #[test]
    fn invalid_nineteen() {
        let Err(e) = Decimals::new(19) else {
            panic!("expected Err");
        };
        assert_eq!(e, SolvencyError::InvalidDecimals("decimals must be 0..=18"));
        assert!(Decimals::new(u8::MAX).is_err());
    }

    #[test]
    fn to_human_usdc() {
        let Ok(d) = Decimals::new(6) else {
            panic!("expected Ok");
        };
        let human = d.to_human(U256::from(2_500_000u64));
        assert!((human - 2.5).abs() < 1e-12);
    }

    #[test]
    fn to_human_zero_decimals_is_identity() {
        assert!((Decimals::ZERO.to_human(U256::from(42u8)) - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn pair_price_scale() {
        let Ok(pair) = PairDecimals::try_from_raw(18, 6) else {
            panic!("expected Ok");
        };
        assert!((pair.price_scale() - 1e12).abs() < 1.0);
        let Ok(flipped) = PairDecimals::try_from_raw(6, 18) else {
            panic!("expected Ok");
        };
        assert!((flipped.price_scale() - 1e-12).abs() < 1e-24);
    }

    #[test]
    fn pair_rejects_invalid() {
        assert!(PairDecimals::try_from_raw(19, 6).is_err());
        assert!(PairDecimals::try_from_raw(6, 19).is_err());
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Decimals::default(), Decimals::ZERO);
        assert_eq!(PairDecimals::default().token1(), Decimals::ZERO);
    }
}
