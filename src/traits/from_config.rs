//! Generic construction from a validated configuration.
//!
//! [`FromConfig`] gives every configurable component one entry point:
//!
//! ```text
//! MarketConfig => SolvencyEngine::from_config(&config)
//! ```
//!
//! Implementations must re-validate the configuration, so a successfully
//! constructed value never carries invalid parameters even if the config
//! was assembled field by field through `Default`.

/// Builds `Self` from a configuration of type `C`.
pub trait FromConfig<C> {
    /// Creates a new instance from `config`.
    ///
    /// The configuration is borrowed so one blueprint can build several
    /// instances.
    ///
    /// # Errors
    ///
    /// Returns [`SolvencyError::InvalidConfiguration`](crate::error::SolvencyError::InvalidConfiguration)
    /// if the configuration is invalid.
    fn from_config(config: &C) -> crate::error::Result<Self>
    where
        Self: Sized;
}
