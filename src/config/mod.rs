//! Engine configuration structs.
//!
//! [`MarketConfig`] is the declarative blueprint for one market; it bundles
//! token decimals with the protocol-wide [`ProtocolParams`] and the
//! [`ThresholdSearch`] stopping rule.  Every struct validates on
//! construction and defaults to the protocol constants.

mod market;
mod protocol;
mod search;

pub use market::MarketConfig;
pub use protocol::{
    ProtocolParams, DEFAULT_HEALTHY_SENTINEL, DEFAULT_LIQUIDATION_INCENTIVE, DEFAULT_MAX_LEVERAGE,
    DEFAULT_PROBE_SCALER_MAX, DEFAULT_PROBE_SCALER_MIN,
};
pub use search::{ThresholdSearch, DEFAULT_ITERATIONS, DEFAULT_PRECISION_DIGITS};
