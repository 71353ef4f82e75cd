//! Solvency predicate over the price axis.

use crate::domain::SqrtPriceX96;

/// Answers whether an account is solvent if the mean price were
/// `sqrt_price`.
///
/// The liquidation-threshold bisection is generic over this trait so the
/// search can be exercised against synthetic predicates in tests.
/// Implementations must be pure: the same price always yields the same
/// answer.
pub trait SolvencyOracle {
    /// Returns `true` if the account passes both probe-price checks with
    /// `sqrt_price` as the mean price.
    ///
    /// # Errors
    ///
    /// Implementations propagate valuation errors; adverse financial
    /// states are `Ok(false)`, never `Err`.
    fn is_solvent_at(&self, sqrt_price: SqrtPriceX96) -> crate::error::Result<bool>;
}

impl<F> SolvencyOracle for F
where
    F: Fn(SqrtPriceX96) -> crate::error::Result<bool>,
{
    fn is_solvent_at(&self, sqrt_price: SqrtPriceX96) -> crate::error::Result<bool> {
        self(sqrt_price)
    }
}
