//! Q64.96 square-root price ratio.

use core::fmt;

use alloy_primitives::U256;

use crate::error::SolvencyError;

/// `2^96`, the fixed-point scale of a sqrt price.
pub const Q96: U256 = U256::from_limbs([0, 1 << 32, 0, 0]);

/// Smallest sqrt ratio reachable by the AMM (`sqrt_ratio_at_tick(MIN_TICK)`).
pub const MIN_SQRT_RATIO: U256 = U256::from_limbs([4_295_128_739, 0, 0, 0]);

/// Largest sqrt ratio reachable by the AMM (`sqrt_ratio_at_tick(MAX_TICK)`).
pub const MAX_SQRT_RATIO: U256 = U256::from_limbs([
    0x5d95_1d52_6398_8d26,
    0xefd1_fc6a_5064_8849,
    0x0000_0000_fffd_8963,
    0,
]);

/// Square root of the token1/token0 raw price ratio, scaled by `2^96`.
///
/// The real ratio is `(sqrt_price / 2^96)^2`.  Values are validated into
/// `[MIN_SQRT_RATIO, MAX_SQRT_RATIO]`; every price the engine derives is
/// clamped into that interval one layer up, never here.
///
/// # Examples
///
/// ```
/// use solvency_engine::domain::{SqrtPriceX96, Q96};
///
/// let one = SqrtPriceX96::new(Q96).expect("2^96 is in range");
/// assert_eq!(one, SqrtPriceX96::ONE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SqrtPriceX96(U256);

impl SqrtPriceX96 {
    /// Protocol floor.
    pub const MIN: Self = Self(MIN_SQRT_RATIO);

    /// Protocol ceiling.
    pub const MAX: Self = Self(MAX_SQRT_RATIO);

    /// Raw price ratio of exactly 1.
    pub const ONE: Self = Self(Q96);

    /// Creates a sqrt price after checking the protocol bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SolvencyError::OutOfRange`] if `value` is outside
    /// `[MIN_SQRT_RATIO, MAX_SQRT_RATIO]`.
    pub fn new(value: U256) -> crate::error::Result<Self> {
        if value < MIN_SQRT_RATIO || value > MAX_SQRT_RATIO {
            return Err(SolvencyError::OutOfRange(
                "sqrt price out of range [MIN_SQRT_RATIO, MAX_SQRT_RATIO]",
            ));
        }
        Ok(Self(value))
    }

    /// Builds a sqrt price from any `U256`, saturating at the protocol bounds.
    #[must_use]
    pub fn clamped(value: U256) -> Self {
        Self(value.clamp(MIN_SQRT_RATIO, MAX_SQRT_RATIO))
    }

    /// Returns the underlying Q64.96 integer.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Floor of the arithmetic mean of two sqrt prices.
    ///
    /// Always lies between the two inputs, so the result stays in range.
    #[must_use]
    pub fn midpoint(&self, other: &Self) -> Self {
        let (lo, hi) = if self.0 <= other.0 {
            (self.0, other.0)
        } else {
            (other.0, self.0)
        };
        Self(lo + (hi - lo) / U256::from(2u8))
    }
}

impl fmt::Display for SqrtPriceX96 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
