//! Human-scale exchange rate between the two tokens of a market.

use core::fmt;

use crate::error::SolvencyError;

/// Which token a human [`Price`] is denominated in.
///
/// [`Token1`](Self::Token1) quotes token0 in units of token1 (the natural
/// orientation of a sqrt price); [`Token0`](Self::Token0) is its reciprocal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuoteToken {
    /// Price of one token1 expressed in token0.
    Token0,
    /// Price of one token0 expressed in token1.
    #[default]
    Token1,
}

impl QuoteToken {
    /// Returns `true` for [`QuoteToken::Token0`].
    #[must_use]
    pub const fn is_token0(&self) -> bool {
        matches!(self, Self::Token0)
    }
}

/// Exchange rate between two tokens in human (decimal-adjusted) units.
///
/// Wraps an `f64` that must be finite and non-negative.  Prices are the
/// *output* of exact sqrt-price arithmetic and feed the `f64` valuation
/// layer; they are never converted back into a sqrt price.
///
/// # Examples
///
/// ```
/// use solvency_engine::domain::Price;
///
/// assert!(Price::new(1.5).is_ok());
/// assert!(Price::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Price ratio of 1:1.
    pub const ONE: Self = Self(1.0);

    /// Price ratio of zero.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Price` from an `f64` value.
    ///
    /// # Errors
    ///
    /// Returns [`SolvencyError::OutOfRange`] if the value is negative, NaN,
    /// or infinite.
    pub fn new(value: f64) -> crate::error::Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(SolvencyError::OutOfRange(
                "price must be finite and non-negative",
            ));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `f64` value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Computes the reciprocal price (`1 / self`).
    ///
    /// # Errors
    ///
    /// Returns [`SolvencyError::DivisionByZero`] if the price is zero, or
    /// [`SolvencyError::OutOfRange`] if the reciprocal is not finite.
    pub fn inverse(&self) -> crate::error::Result<Self> {
        if self.0 == 0.0 {
            return Err(SolvencyError::DivisionByZero);
        }
        Self::new(1.0 / self.0)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
