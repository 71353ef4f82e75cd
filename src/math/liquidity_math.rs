//! Token amounts and token1 value of a concentrated-liquidity position.
//!
//! The raw helpers work in smallest token units with exact 256-bit
//! arithmetic; [`amounts_for_liquidity`] and
//! [`value_of_liquidity_in_token1`] convert the result to human units.
//!
//! Regions are decided on ticks, with the range lower-inclusive and
//! upper-exclusive:
//!
//! | current tick | holdings |
//! |--------------|----------|
//! | `< lower` | token0 only |
//! | `lower..upper` | both, split at the current sqrt price |
//! | `>= upper` | token1 only |

use alloy_primitives::U256;

use crate::domain::{Decimals, PairDecimals, Rounding, Tick, UniswapPosition, Q96};
use crate::math::{get_sqrt_ratio_at_tick, mul_div};

/// Token0 held by `liquidity` between two sqrt prices (order-insensitive).
///
/// # Errors
///
/// Returns [`SolvencyError::DivisionByZero`](crate::error::SolvencyError::DivisionByZero)
/// if the smaller sqrt price is zero.
pub fn get_amount0_for_liquidity(
    sqrt_a: U256,
    sqrt_b: U256,
    liquidity: u128,
) -> crate::error::Result<U256> {
    let (sqrt_lower, sqrt_upper) = ordered(sqrt_a, sqrt_b);
    let scaled = mul_div(
        U256::from(liquidity) << 96_usize,
        sqrt_upper - sqrt_lower,
        sqrt_upper,
        Rounding::Down,
    )?;
    if sqrt_lower.is_zero() {
        return Err(crate::error::SolvencyError::DivisionByZero);
    }
    Ok(scaled / sqrt_lower)
}

/// Token1 held by `liquidity` between two sqrt prices (order-insensitive).
///
/// # Errors
///
/// Propagates [`mul_div`] errors.
pub fn get_amount1_for_liquidity(
    sqrt_a: U256,
    sqrt_b: U256,
    liquidity: u128,
) -> crate::error::Result<U256> {
    let (sqrt_lower, sqrt_upper) = ordered(sqrt_a, sqrt_b);
    mul_div(
        U256::from(liquidity),
        sqrt_upper - sqrt_lower,
        Q96,
        Rounding::Down,
    )
}

fn ordered(a: U256, b: U256) -> (U256, U256) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Sqrt prices of the position bounds, or `None` if it holds nothing.
fn bounds(position: &UniswapPosition) -> crate::error::Result<Option<(U256, U256)>> {
    if position.is_empty() {
        return Ok(None);
    }
    let sqrt_lower = get_sqrt_ratio_at_tick(position.lower_tick().get())?;
    let sqrt_upper = get_sqrt_ratio_at_tick(position.upper_tick().get())?;
    Ok(Some((sqrt_lower, sqrt_upper)))
}

/// Raw token0 and token1 amounts of `position` at `current_tick`.
///
/// # Errors
///
/// Propagates [`mul_div`] errors.
pub fn get_amounts_for_liquidity(
    position: &UniswapPosition,
    current_tick: Tick,
) -> crate::error::Result<(U256, U256)> {
    let Some((sqrt_lower, sqrt_upper)) = bounds(position)? else {
        return Ok((U256::ZERO, U256::ZERO));
    };
    let liquidity = position.liquidity().get();

    if current_tick < position.lower_tick() {
        let amount0 = get_amount0_for_liquidity(sqrt_lower, sqrt_upper, liquidity)?;
        Ok((amount0, U256::ZERO))
    } else if position.is_in_range(current_tick) {
        let sqrt_current = get_sqrt_ratio_at_tick(current_tick.get())?;
        let amount0 = get_amount0_for_liquidity(sqrt_current, sqrt_upper, liquidity)?;
        let amount1 = get_amount1_for_liquidity(sqrt_lower, sqrt_current, liquidity)?;
        Ok((amount0, amount1))
    } else {
        let amount1 = get_amount1_for_liquidity(sqrt_lower, sqrt_upper, liquidity)?;
        Ok((U256::ZERO, amount1))
    }
}

/// Raw value of `position` at `current_tick`, in token1 smallest units.
///
/// # Errors
///
/// Returns [`SolvencyError::Overflow`](crate::error::SolvencyError::Overflow)
/// if the value does not fit 256 bits.
pub fn get_value_of_liquidity(
    position: &UniswapPosition,
    current_tick: Tick,
) -> crate::error::Result<U256> {
    let Some((sqrt_lower, sqrt_upper)) = bounds(position)? else {
        return Ok(U256::ZERO);
    };
    let liquidity = position.liquidity().to_u256();
    let sqrt_current = get_sqrt_ratio_at_tick(current_tick.get())?;

    if current_tick < position.lower_tick() {
        let scaled = mul_div(liquidity, sqrt_upper - sqrt_lower, sqrt_upper, Rounding::Down)?;
        let scaled = mul_div(scaled, sqrt_current, sqrt_lower, Rounding::Down)?;
        mul_div(scaled, sqrt_current, Q96, Rounding::Down)
    } else if position.is_in_range(current_tick) {
        let value1 = mul_div(liquidity, sqrt_current - sqrt_lower, Q96, Rounding::Down)?;
        let scaled = mul_div(liquidity, sqrt_upper - sqrt_current, sqrt_upper, Rounding::Down)?;
        let value0 = mul_div(scaled, sqrt_current, Q96, Rounding::Down)?;
        value1
            .checked_add(value0)
            .ok_or(crate::error::SolvencyError::Overflow("liquidity value exceeds 256 bits"))
    } else {
        mul_div(liquidity, sqrt_upper - sqrt_lower, Q96, Rounding::Down)
    }
}

/// Human token0 and token1 amounts of `position` at `current_tick`.
///
/// Ticks are normalized at construction of [`UniswapPosition`]; zero
/// liquidity and zero width both yield `(0.0, 0.0)`.
///
/// # Errors
///
/// Propagates [`get_amounts_for_liquidity`] errors.
pub fn amounts_for_liquidity(
    position: &UniswapPosition,
    current_tick: Tick,
    decimals: PairDecimals,
) -> crate::error::Result<(f64, f64)> {
    let (raw0, raw1) = get_amounts_for_liquidity(position, current_tick)?;
    Ok((
        decimals.token0().to_human(raw0),
        decimals.token1().to_human(raw1),
    ))
}

/// Human value of `position` at `current_tick`, denominated in token1.
///
/// # Errors
///
/// Propagates [`get_value_of_liquidity`] errors.
pub fn value_of_liquidity_in_token1(
    position: &UniswapPosition,
    current_tick: Tick,
    decimals1: Decimals,
) -> crate::error::Result<f64> {
    Ok(decimals1.to_human(get_value_of_liquidity(position, current_tick)?))
}
