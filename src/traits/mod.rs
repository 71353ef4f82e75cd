//! Trait seams of the engine.
//!
//! - [`FromConfig`]: construction from a validated configuration.
//! - [`SolvencyOracle`]: the solvent/liquidatable predicate the threshold
//!   search bisects over.

mod from_config;
mod oracle;

pub use from_config::FromConfig;
pub use oracle::SolvencyOracle;
