//! Per-market engine configuration.

use crate::config::{ProtocolParams, ThresholdSearch};
use crate::domain::PairDecimals;

/// Everything the engine needs to know about one token pair.
///
/// This is the declarative blueprint from which a
/// [`SolvencyEngine`](crate::solvency::SolvencyEngine) is built via
/// [`FromConfig`](crate::traits::FromConfig).
///
/// # Examples
///
/// ```
/// use solvency_engine::config::{MarketConfig, ProtocolParams, ThresholdSearch};
/// use solvency_engine::domain::PairDecimals;
///
/// let decimals = PairDecimals::try_from_raw(18, 6).expect("valid decimals");
/// let config = MarketConfig::new(decimals, ProtocolParams::default(), ThresholdSearch::default())
///     .expect("defaults are valid");
/// assert_eq!(config.decimals().token1().get(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MarketConfig {
    decimals: PairDecimals,
    protocol: ProtocolParams,
    search: ThresholdSearch,
}

impl MarketConfig {
    /// Creates a validated market configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SolvencyError::InvalidConfiguration`](crate::error::SolvencyError::InvalidConfiguration)
    /// if the protocol parameters or search settings are invalid.
    pub fn new(
        decimals: PairDecimals,
        protocol: ProtocolParams,
        search: ThresholdSearch,
    ) -> crate::error::Result<Self> {
        let config = Self {
            decimals,
            protocol,
            search,
        };
        config.validate()?;
        Ok(config)
    }

    /// Uses the protocol defaults for everything but the decimals.
    #[must_use]
    pub fn with_decimals(decimals: PairDecimals) -> Self {
        Self {
            decimals,
            ..Self::default()
        }
    }

    /// Validates every part of the configuration.
    ///
    /// # Errors
    ///
    /// Propagates the first failing part's error.
    pub fn validate(&self) -> crate::error::Result<()> {
        self.protocol.validate()?;
        self.search.validate()
    }

    /// Token decimals.
    #[must_use]
    pub const fn decimals(&self) -> PairDecimals {
        self.decimals
    }

    /// Protocol constants.
    #[must_use]
    pub const fn protocol(&self) -> &ProtocolParams {
        &self.protocol
    }

    /// Threshold search settings.
    #[must_use]
    pub const fn search(&self) -> &ThresholdSearch {
        &self.search
    }
}
