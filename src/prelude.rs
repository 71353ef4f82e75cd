//! Convenience re-exports for common types, traits and functions.
//!
//! ```rust
//! use solvency_engine::prelude::*;
//! ```
//!
//! Brings the account model, the market configuration, the engine facade
//! and the error type into scope in one import.

// Domain types
pub use crate::domain::{
    Assets, Decimals, Liabilities, Liquidity, PairDecimals, Portfolio, Price, QuoteToken,
    RiskParameters, Rounding, SqrtPriceX96, Tick, UniswapPosition,
};

// Core traits
pub use crate::traits::{FromConfig, SolvencyOracle};

// Configuration
pub use crate::config::{MarketConfig, ProtocolParams, ThresholdSearch};

// Engine
pub use crate::solvency::{
    compute_liquidation_thresholds, is_solvent, max_borrow_and_withdraw, max_borrows,
    max_withdraws, AccountSnapshot, LiquidationThresholds, SolvencyEngine, SolvencyReport,
};

// Error types
pub use crate::error::{Result, SolvencyError};
