//! Rounding direction for integer division.

/// Direction in which [`mul_div`](crate::math::mul_div) rounds a
/// non-exact quotient.
///
/// Sqrt-price and liquidity arithmetic never divides implicitly; every
/// call site states which way the remainder goes.
///
/// # Examples
///
/// ```
/// use solvency_engine::domain::Rounding;
///
/// assert!(Rounding::Up.is_up());
/// assert!(!Rounding::Down.is_up());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    /// Ceiling.
    Up,
    /// Floor.
    #[default]
    Down,
}

impl Rounding {
    /// Returns `true` for [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }
}
