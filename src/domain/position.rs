//! Concentrated liquidity position held as margin collateral.

use core::fmt;

use super::{Liquidity, Tick};

/// A Uniswap-V3-style liquidity range owned by a margin account.
///
/// Unlike a pool-side position, the constructor is total: callers may pass
/// the ticks in either order and the range is normalized so that
/// `lower_tick <= upper_tick`.  A zero-width range or zero liquidity is
/// accepted; such a position simply values to nothing.
///
/// # Examples
///
/// ```
/// use solvency_engine::domain::{Liquidity, Tick, UniswapPosition};
///
/// let a = Tick::new(100).unwrap_or(Tick::ZERO);
/// let b = Tick::new(-100).unwrap_or(Tick::ZERO);
/// let pos = UniswapPosition::new(a, b, Liquidity::new(1_000));
/// assert_eq!(pos.lower_tick(), b);
/// assert_eq!(pos.upper_tick(), a);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniswapPosition {
    lower_tick: Tick,
    upper_tick: Tick,
    liquidity: Liquidity,
}

impl UniswapPosition {
    /// Creates a position, swapping the ticks if they arrive reversed.
    #[must_use]
    pub fn new(tick_a: Tick, tick_b: Tick, liquidity: Liquidity) -> Self {
        let (lower_tick, upper_tick) = if tick_a <= tick_b {
            (tick_a, tick_b)
        } else {
            (tick_b, tick_a)
        };
        Self {
            lower_tick,
            upper_tick,
            liquidity,
        }
    }

    /// Returns the lower tick boundary.
    #[must_use]
    pub const fn lower_tick(&self) -> Tick {
        self.lower_tick
    }

    /// Returns the upper tick boundary.
    #[must_use]
    pub const fn upper_tick(&self) -> Tick {
        self.upper_tick
    }

    /// Returns the liquidity in this position.
    #[must_use]
    pub const fn liquidity(&self) -> Liquidity {
        self.liquidity
    }

    /// Returns the width of the tick range (`upper - lower`), never negative.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.upper_tick.get() - self.lower_tick.get()
    }

    /// Returns `true` if the position cannot hold any value.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.liquidity.is_zero() || self.width() == 0
    }

    /// `lower_tick <= current_tick < upper_tick`.
    #[must_use]
    pub const fn is_in_range(&self, current_tick: Tick) -> bool {
        current_tick.get() >= self.lower_tick.get() && current_tick.get() < self.upper_tick.get()
    }
}

impl fmt::Display for UniswapPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UniswapPosition([{}, {}), liquidity={})",
            self.lower_tick, self.upper_tick, self.liquidity
        )
    }
}
