//! Fundamental domain value types used throughout the engine.
//!
//! This module contains the value types that model a margin account:
//! ticks and sqrt prices, human prices, token decimals, liquidity
//! positions, balances, liabilities and oracle risk inputs.  Types use
//! newtypes with validated constructors to enforce invariants.

mod balances;
mod decimals;
mod liquidity;
mod portfolio;
mod position;
mod price;
mod risk;
mod rounding;
mod sqrt_price;
mod tick;

pub use balances::{Assets, Liabilities, MAX_AMOUNT};
pub use decimals::{Decimals, PairDecimals};
pub use liquidity::Liquidity;
pub use portfolio::Portfolio;
pub use position::UniswapPosition;
pub use price::{Price, QuoteToken};
pub use risk::RiskParameters;
pub use rounding::Rounding;
pub use sqrt_price::{SqrtPriceX96, MAX_SQRT_RATIO, MIN_SQRT_RATIO, Q96};
pub use tick::{Tick, MAX_TICK, MIN_TICK};
