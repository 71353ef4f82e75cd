//! The solvency engine proper.
//!
//! Leaves first:
//!
//! | Module | Provides |
//! |--------|----------|
//! | `probe` | stress sqrt prices sized by implied volatility |
//! | `basics` | assets, effective liabilities and surplus at both probes |
//! | `health` | dual-probe solvency check and health ratio |
//! | `limits` | max borrow, withdraw and borrow-and-withdraw amounts |
//! | `thresholds` | liquidation prices by significant-digit bisection |
//! | `engine` | [`SolvencyEngine`], bound to one market's configuration |
//!
//! Every function here is pure; adverse account states are ordinary
//! results, never errors.

mod basics;
mod engine;
mod health;
mod limits;
mod probe;
mod thresholds;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use basics::{compute_solvency_basics, SolvencyBasics};
pub use engine::SolvencyEngine;
pub use health::{is_solvent, SolvencyReport};
pub use limits::{max_borrow_and_withdraw, max_borrows, max_withdraws, LIMIT_SAFETY_MARGIN};
pub use probe::{compute_probe_prices, probe_scaler, ProbePrices};
pub use thresholds::{
    compute_liquidation_thresholds, find_liquidation_thresholds, search_threshold,
    AccountSnapshot, LiquidationThresholds, SearchOutcome,
};
