//! Liquidity units for concentrated positions.

use core::fmt;

use alloy_primitives::U256;

/// Liquidity units in a concentrated position.
///
/// This is distinct from a token amount because it measures the depth
/// available across a price range, not a balance of a specific token.
/// All `u128` values are valid liquidity amounts.
///
/// # Examples
///
/// ```
/// use solvency_engine::domain::Liquidity;
///
/// let liquidity = Liquidity::new(1_000);
/// assert_eq!(liquidity.get(), 1_000);
/// assert!(!liquidity.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Liquidity(u128);

impl Liquidity {
    /// No liquidity.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Liquidity` from a raw `u128` value.
    #[must_use]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the liquidity is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Widens to a 256-bit integer for sqrt-price arithmetic.
    #[must_use]
    pub fn to_u256(&self) -> U256 {
        U256::from(self.0)
    }
}

impl fmt::Display for Liquidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
