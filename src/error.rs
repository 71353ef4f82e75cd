//! Unified error types for the solvency engine.
//!
//! All fallible operations across the crate return [`SolvencyError`] as
//! their error type.  Adverse financial states (an undercollateralized or
//! liquidatable account) are *not* errors: they are ordinary results with
//! `health < 1` and zeroed max amounts.  Errors are reserved for inputs
//! that violate a hard protocol bound or a validated constructor.

/// Errors produced by the solvency engine.
///
/// Every variant carries a static description of the violated constraint
/// so callers can log it without allocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SolvencyError {
    /// A tick or sqrt price lies outside the protocol's absolute bounds.
    #[error("value out of range: {0}")]
    OutOfRange(&'static str),

    /// Token decimal count outside `0..=18`.
    #[error("invalid decimals: {0}")]
    InvalidDecimals(&'static str),

    /// A balance or liability is negative, NaN or infinite.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// A configuration parameter is inconsistent or out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A 256-bit intermediate result does not fit its target width.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Division by a zero denominator.
    #[error("division by zero")]
    DivisionByZero,
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, SolvencyError>;
