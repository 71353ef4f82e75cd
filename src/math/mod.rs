//! Exact integer arithmetic for sqrt prices, ticks and liquidity.
//!
//! | Module | Provides |
//! |--------|----------|
//! | `full_math` | [`mul_div`] over a 512-bit intermediate, [`u256_to_f64`] |
//! | `tick_math` | tick ⇄ sqrt price, bit-exact with the on-chain AMM |
//! | `price_math` | sqrt price / tick → human [`Price`](crate::domain::Price) |
//! | `liquidity_math` | token amounts and token1 value of a position |
//! | `significant` | significant-digit rounding of `U256` values |

mod full_math;
mod liquidity_math;
mod price_math;
mod significant;
mod tick_math;

pub use full_math::{mul_div, u256_to_f64};
pub use liquidity_math::{
    amounts_for_liquidity, get_amount0_for_liquidity, get_amount1_for_liquidity,
    get_amounts_for_liquidity, get_value_of_liquidity, value_of_liquidity_in_token1,
};
pub use price_math::{sqrt_price_to_price, tick_to_price};
pub use significant::{agree_to_significant_digits, round_to_significant, MAX_SIGNIFICANT_DIGITS};
pub use tick_math::{
    get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio, sqrt_price_to_tick, tick_to_sqrt_price,
};
