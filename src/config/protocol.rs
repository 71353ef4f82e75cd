//! Protocol-wide risk constants.

use crate::error::SolvencyError;

/// Default maximum leverage: liabilities are inflated by `1 / 200`.
pub const DEFAULT_MAX_LEVERAGE: f64 = 200.0;

/// Default liquidation incentive divisor: shortfall adds `1 / 20`.
pub const DEFAULT_LIQUIDATION_INCENTIVE: f64 = 20.0;

/// Smallest probe-price scaler, regardless of reported volatility.
pub const DEFAULT_PROBE_SCALER_MIN: f64 = 1.0262;

/// Largest probe-price scaler, regardless of reported volatility.
pub const DEFAULT_PROBE_SCALER_MAX: f64 = 3.0787;

/// Health reported for an account without liabilities.
pub const DEFAULT_HEALTHY_SENTINEL: f64 = 1000.0;

/// Constants that shape every solvency evaluation.
///
/// # Validation
///
/// - All values must be finite.
/// - `max_leverage` and `liquidation_incentive` must be greater than zero.
/// - `1 < probe_scaler_min <= probe_scaler_max`.
/// - `healthy_sentinel` must be greater than 1, so an account without debt
///   always reads as healthy.
///
/// # Examples
///
/// ```
/// use solvency_engine::config::ProtocolParams;
///
/// let params = ProtocolParams::default();
/// assert_eq!(params.max_leverage(), 200.0);
/// assert!(ProtocolParams::new(0.0, 20.0, 1.0262, 3.0787, 1000.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProtocolParams {
    max_leverage: f64,
    liquidation_incentive: f64,
    probe_scaler_min: f64,
    probe_scaler_max: f64,
    healthy_sentinel: f64,
}

impl ProtocolParams {
    /// Creates validated protocol parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SolvencyError::InvalidConfiguration`] if any invariant
    /// listed on the type does not hold.
    pub fn new(
        max_leverage: f64,
        liquidation_incentive: f64,
        probe_scaler_min: f64,
        probe_scaler_max: f64,
        healthy_sentinel: f64,
    ) -> crate::error::Result<Self> {
        let params = Self {
            max_leverage,
            liquidation_incentive,
            probe_scaler_min,
            probe_scaler_max,
            healthy_sentinel,
        };
        params.validate()?;
        Ok(params)
    }

    /// Validates all parameter invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SolvencyError::InvalidConfiguration`] naming the first
    /// violated invariant.
    pub fn validate(&self) -> crate::error::Result<()> {
        let all_finite = [
            self.max_leverage,
            self.liquidation_incentive,
            self.probe_scaler_min,
            self.probe_scaler_max,
            self.healthy_sentinel,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !all_finite {
            return Err(SolvencyError::InvalidConfiguration(
                "protocol parameters must be finite",
            ));
        }
        if self.max_leverage <= 0.0 {
            return Err(SolvencyError::InvalidConfiguration(
                "max leverage must be greater than zero",
            ));
        }
        if self.liquidation_incentive <= 0.0 {
            return Err(SolvencyError::InvalidConfiguration(
                "liquidation incentive must be greater than zero",
            ));
        }
        if self.probe_scaler_min <= 1.0 || self.probe_scaler_min > self.probe_scaler_max {
            return Err(SolvencyError::InvalidConfiguration(
                "probe scaler bounds must satisfy 1 < min <= max",
            ));
        }
        if self.healthy_sentinel <= 1.0 {
            return Err(SolvencyError::InvalidConfiguration(
                "healthy sentinel must be greater than 1",
            ));
        }
        Ok(())
    }

    /// Maximum leverage.
    #[must_use]
    pub const fn max_leverage(&self) -> f64 {
        self.max_leverage
    }

    /// Liquidation incentive divisor.
    #[must_use]
    pub const fn liquidation_incentive(&self) -> f64 {
        self.liquidation_incentive
    }

    /// Lower clamp of the probe scaler.
    #[must_use]
    pub const fn probe_scaler_min(&self) -> f64 {
        self.probe_scaler_min
    }

    /// Upper clamp of the probe scaler.
    #[must_use]
    pub const fn probe_scaler_max(&self) -> f64 {
        self.probe_scaler_max
    }

    /// Health reported when there is nothing owed.
    #[must_use]
    pub const fn healthy_sentinel(&self) -> f64 {
        self.healthy_sentinel
    }

    /// `1 + 1 / max_leverage`, the factor applied to every liability.
    #[must_use]
    pub fn leverage_factor(&self) -> f64 {
        1.0 + 1.0 / self.max_leverage
    }
}

impl Default for ProtocolParams {
    fn default() -> Self {
        Self {
            max_leverage: DEFAULT_MAX_LEVERAGE,
            liquidation_incentive: DEFAULT_LIQUIDATION_INCENTIVE,
            probe_scaler_min: DEFAULT_PROBE_SCALER_MIN,
            probe_scaler_max: DEFAULT_PROBE_SCALER_MAX,
            healthy_sentinel: DEFAULT_HEALTHY_SENTINEL,
        }
    }
}
