//! 512-bit intermediate multiplication and division.
//!
//! Products of two Q64.96 sqrt prices or of a sqrt price and a `u128`
//! liquidity overflow 256 bits long before the final quotient does.
//! [`mul_div`] widens both factors into a 512-bit integer, divides there,
//! and narrows the quotient back, failing only if the quotient itself does
//! not fit.

use alloy_primitives::{Uint, U256};

use crate::domain::Rounding;
use crate::error::SolvencyError;

/// Unsigned 512-bit integer used for intermediate products.
pub(crate) type U512 = Uint<512, 8>;

/// `2^64` as `f64`.
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

pub(crate) fn widen(value: U256) -> U512 {
    let [l0, l1, l2, l3] = *value.as_limbs();
    U512::from_limbs([l0, l1, l2, l3, 0, 0, 0, 0])
}

fn narrow(value: U512) -> crate::error::Result<U256> {
    let [l0, l1, l2, l3, h0, h1, h2, h3] = *value.as_limbs();
    if h0 | h1 | h2 | h3 != 0 {
        return Err(SolvencyError::Overflow("mul_div result exceeds 256 bits"));
    }
    Ok(U256::from_limbs([l0, l1, l2, l3]))
}

/// Computes `a * b / denominator` with full 512-bit precision.
///
/// # Errors
///
/// - [`SolvencyError::DivisionByZero`] if `denominator` is zero.
/// - [`SolvencyError::Overflow`] if the quotient exceeds `U256::MAX`.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use solvency_engine::domain::Rounding;
/// use solvency_engine::math::mul_div;
///
/// let q = mul_div(U256::from(7u8), U256::from(3u8), U256::from(2u8), Rounding::Up);
/// assert_eq!(q, Ok(U256::from(11u8)));
/// ```
pub fn mul_div(
    a: U256,
    b: U256,
    denominator: U256,
    rounding: Rounding,
) -> crate::error::Result<U256> {
    if denominator.is_zero() {
        return Err(SolvencyError::DivisionByZero);
    }
    let product = widen(a) * widen(b);
    let denominator = widen(denominator);
    let mut quotient = product / denominator;
    if rounding.is_up() && !(product % denominator).is_zero() {
        quotient += U512::from(1u8);
    }
    narrow(quotient)
}

/// Converts little-endian 64-bit limbs into the nearest `f64`.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn limbs_to_f64(limbs: &[u64]) -> f64 {
    limbs
        .iter()
        .rev()
        .fold(0.0, |acc, &limb| acc * TWO_POW_64 + limb as f64)
}

/// Lossy conversion of a `U256` into `f64`.
#[must_use]
pub fn u256_to_f64(value: U256) -> f64 {
    limbs_to_f64(value.as_limbs())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn exact_division() {
        let Ok(q) = mul_div(
            U256::from(10u8),
            U256::from(10u8),
            U256::from(4u8),
            Rounding::Down,
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(q, U256::from(25u8));
    }

    #[test]
    fn rounding_direction() {
        let down = mul_div(U256::from(7u8), U256::from(1u8), U256::from(2u8), Rounding::Down);
        let up = mul_div(U256::from(7u8), U256::from(1u8), U256::from(2u8), Rounding::Up);
        assert_eq!(down, Ok(U256::from(3u8)));
        assert_eq!(up, Ok(U256::from(4u8)));
    }

    #[test]
    fn intermediate_overflow_is_absorbed() {
        let Ok(q) = mul_div(U256::MAX, U256::MAX, U256::MAX, Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(q, U256::MAX);
    }

    #[test]
    fn quotient_overflow_is_error() {
        let Err(e) = mul_div(U256::MAX, U256::from(2u8), U256::from(1u8), Rounding::Down) else {
            panic!("expected Err");
        };
        assert!(matches!(e, SolvencyError::Overflow(_)));
    }

    #[test]
    fn zero_denominator() {
        assert_eq!(
            mul_div(U256::from(1u8), U256::from(1u8), U256::ZERO, Rounding::Down),
            Err(SolvencyError::DivisionByZero)
        );
    }

    #[test]
    fn to_f64_small_and_large() {
        assert!((u256_to_f64(U256::from(12_345u32)) - 12_345.0).abs() < f64::EPSILON);
        let two_pow_96 = U256::from(1u8) << 96_usize;
        assert!((u256_to_f64(two_pow_96) - 2f64.powi(96)).abs() < 1.0);
        assert!((u256_to_f64(U256::MAX) / 2f64.powi(256) - 1.0).abs() < 1e-12);
    }
}
