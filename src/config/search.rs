//! Liquidation-threshold search settings.

use crate::error::SolvencyError;
use crate::math::MAX_SIGNIFICANT_DIGITS;

/// Default bisection step limit.
pub const DEFAULT_ITERATIONS: u32 = 120;

/// Default number of significant digits two midpoints must share.
pub const DEFAULT_PRECISION_DIGITS: u8 = 7;

/// Stopping rule of the threshold bisection.
///
/// The search ends when two consecutive midpoints agree to
/// `precision_digits` significant digits or after `iterations` steps,
/// whichever happens first.
///
/// # Validation
///
/// - `iterations >= 1`
/// - `1 <= precision_digits <= 78`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThresholdSearch {
    iterations: u32,
    precision_digits: u8,
}

impl ThresholdSearch {
    /// Creates validated search settings.
    ///
    /// # Errors
    ///
    /// Returns [`SolvencyError::InvalidConfiguration`] if either value is
    /// out of range.
    pub fn new(iterations: u32, precision_digits: u8) -> crate::error::Result<Self> {
        let search = Self {
            iterations,
            precision_digits,
        };
        search.validate()?;
        Ok(search)
    }

    /// Validates the search settings.
    ///
    /// # Errors
    ///
    /// Returns [`SolvencyError::InvalidConfiguration`] if either value is
    /// out of range.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.iterations == 0 {
            return Err(SolvencyError::InvalidConfiguration(
                "search iterations must be at least 1",
            ));
        }
        if self.precision_digits == 0 || self.precision_digits > MAX_SIGNIFICANT_DIGITS {
            return Err(SolvencyError::InvalidConfiguration(
                "precision digits must be in 1..=78",
            ));
        }
        Ok(())
    }

    /// Maximum number of bisection steps per direction.
    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Significant digits used by the convergence check.
    #[must_use]
    pub const fn precision_digits(&self) -> u8 {
        self.precision_digits
    }
}

impl Default for ThresholdSearch {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            precision_digits: DEFAULT_PRECISION_DIGITS,
        }
    }
}
