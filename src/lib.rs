//! # Solvency Engine
//!
//! Solvency, health and liquidation-threshold calculations for margin
//! accounts that hold plain token balances, concentrated-liquidity
//! (Uniswap v3 style) positions and debt in the two tokens of one pair.
//!
//! An account is judged at two *probe* prices placed below and above the
//! current mean price, sized by the oracle's implied volatility.  It is
//! solvent only if its assets cover its leverage-weighted liabilities at
//! both probes.  From the same numbers the engine derives a health ratio,
//! the largest safe borrow and withdrawal amounts, and the pair of prices
//! at which the account would become liquidatable.
//!
//! # Quick Start
//!
//! ```rust
//! use solvency_engine::config::MarketConfig;
//! use solvency_engine::domain::{
//!     Assets, Liabilities, PairDecimals, Portfolio, RiskParameters, SqrtPriceX96,
//! };
//! use solvency_engine::solvency::SolvencyEngine;
//!
//! // 1. One market: both tokens use 18 decimals
//! let decimals = PairDecimals::try_from_raw(18, 18).expect("valid decimals");
//! let engine = SolvencyEngine::new(MarketConfig::with_decimals(decimals))
//!     .expect("valid config");
//!
//! // 2. An account with 1 000 of each token and 400 token0 of debt
//! let portfolio = Portfolio::from_assets(Assets::new(1_000.0, 1_000.0).expect("valid"));
//! let liabilities = Liabilities::new(400.0, 0.0).expect("valid");
//!
//! // 3. Oracle inputs: mean price 1.0, 50% implied volatility, 4 sigma
//! let risk = RiskParameters::new(0.5, 4.0);
//! let mean = SqrtPriceX96::ONE;
//!
//! let report = engine
//!     .is_solvent(&portfolio, &liabilities, mean, &risk)
//!     .expect("in range");
//! assert!(report.is_solvent());
//! assert!(report.health > 1.0);
//!
//! let thresholds = engine
//!     .liquidation_thresholds(&portfolio, &liabilities, mean, &risk)
//!     .expect("in range");
//! assert!(thresholds.lower_sqrt_ratio() <= mean);
//! assert!(mean <= thresholds.upper_sqrt_ratio());
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  Portfolio + Liabilities + mean price + RiskParameters
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │   Solvency    │  probes, basics, health, limits, thresholds
//! └──────┬───────┘
//!        │ amounts and values at probe prices
//!        ▼
//! ┌──────────────┐
//! │     Math      │  tick math, 512-bit mul_div, liquidity amounts
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │    Domain     │  Tick, SqrtPriceX96, Decimals, UniswapPosition, …
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Validated value types: [`Tick`](domain::Tick), [`SqrtPriceX96`](domain::SqrtPriceX96), [`Portfolio`](domain::Portfolio), etc. |
//! | [`math`] | Exact Q64.96 tick math, full-precision `mul_div`, liquidity amounts |
//! | [`config`] | [`ProtocolParams`](config::ProtocolParams), [`ThresholdSearch`](config::ThresholdSearch), [`MarketConfig`](config::MarketConfig) |
//! | [`solvency`] | Probe prices, solvency checks, limits and liquidation thresholds |
//! | [`traits`] | [`SolvencyOracle`](traits::SolvencyOracle), [`FromConfig`](traits::FromConfig) |
//! | [`error`] | [`SolvencyError`](error::SolvencyError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and functions |

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod prelude;
pub mod solvency;
pub mod traits;
