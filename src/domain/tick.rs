//! Discrete price index of a concentrated-liquidity AMM.

use core::fmt;

use crate::error::SolvencyError;

/// Minimum valid tick index (Uniswap v3 standard).
pub const MIN_TICK: i32 = -887_272;

/// Maximum valid tick index (Uniswap v3 standard).
pub const MAX_TICK: i32 = 887_272;

/// A discrete price point in the concentrated liquidity model.
///
/// Price increases monotonically with the tick index: the canonical price
/// of tick `t` is `1.0001^t`.  Valid indices range from [`MIN`](Self::MIN)
/// (`-887272`) to [`MAX`](Self::MAX) (`887272`).
///
/// # Examples
///
/// ```
/// use solvency_engine::domain::Tick;
///
/// let tick = Tick::new(100);
/// assert!(tick.is_ok());
/// assert_eq!(tick.unwrap_or(Tick::ZERO).get(), 100);
/// assert!(Tick::new(887_273).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tick(i32);

impl Tick {
    /// Minimum valid tick (`-887272`).
    pub const MIN: Self = Self(MIN_TICK);

    /// Maximum valid tick (`887272`).
    pub const MAX: Self = Self(MAX_TICK);

    /// Neutral tick where the canonical price is `1.0`.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Tick` with range validation.
    ///
    /// # Errors
    ///
    /// Returns [`SolvencyError::OutOfRange`] if `value` is outside
    /// `[-887272, 887272]`.
    pub const fn new(value: i32) -> crate::error::Result<Self> {
        if value < MIN_TICK || value > MAX_TICK {
            return Err(SolvencyError::OutOfRange(
                "tick out of range [-887272, 887272]",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `i32` tick index.
    #[must_use]
    pub const fn get(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tick({})", self.0)
    }
}
