//! Oracle-supplied volatility inputs.

/// Implied volatility and stress multiplier for one market.
///
/// Both values are opaque oracle outputs.  They are not validated: the
/// probe-price computation clamps whatever it derives from them, and NaN
/// inputs fall back to the widest allowed stress range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RiskParameters {
    implied_volatility: f64,
    n_sigma: f64,
}

impl RiskParameters {
    /// Creates risk parameters from an annualized implied volatility and a
    /// number of standard deviations.
    #[must_use]
    pub const fn new(implied_volatility: f64, n_sigma: f64) -> Self {
        Self {
            implied_volatility,
            n_sigma,
        }
    }

    /// Annualized, dimensionless implied volatility.
    #[must_use]
    pub const fn implied_volatility(&self) -> f64 {
        self.implied_volatility
    }

    /// Stress multiplier (typically 4 to 5).
    #[must_use]
    pub const fn n_sigma(&self) -> f64 {
        self.n_sigma
    }
}
