//! Rounding of 256-bit integers to a number of significant decimal digits.
//!
//! The liquidation-threshold bisection stops once two consecutive
//! midpoints agree to a fixed count of significant digits.  Rounding is
//! half-up on the decimal representation:
//!
//! | value | digits | rounded |
//! |-------|--------|---------|
//! | `12_345` | 3 | `123 * 10^2` |
//! | `12_350` | 3 | `124 * 10^2` |
//! | `99_960` | 3 | `100 * 10^3` |
//!
//! # Examples
//!
//! ```
//! use alloy_primitives::U256;
//! use solvency_engine::math::agree_to_significant_digits;
//!
//! let a = U256::from(1_234_567u32);
//! let b = U256::from(1_234_999u32);
//! assert!(agree_to_significant_digits(a, b, 4));
//! assert!(!agree_to_significant_digits(a, b, 5));
//! ```

use alloy_primitives::U256;

/// Largest meaningful digit count for a `U256` (`U256::MAX` has 78 digits).
pub const MAX_SIGNIFICANT_DIGITS: u8 = 78;

fn pow10(exponent: u32) -> U256 {
    let ten = U256::from(10u8);
    (0..exponent).fold(U256::from(1u8), |acc, _| acc * ten)
}

fn decimal_digits(value: U256) -> u32 {
    let ten = U256::from(10u8);
    let mut count = 0;
    let mut bound = U256::from(1u8);
    while bound <= value {
        count += 1;
        match bound.checked_mul(ten) {
            Some(next) => bound = next,
            None => break,
        }
    }
    count
}

/// Rounds `value` half-up to `digits` significant digits.
///
/// Returns `(mantissa, exponent)` with `value ≈ mantissa * 10^exponent`
/// and `mantissa < 10^digits`, so two results compare equal exactly when
/// the values agree to `digits` significant digits.  `digits == 0` is
/// treated as 1; zero maps to `(0, 0)`.
#[must_use]
pub fn round_to_significant(value: U256, digits: u8) -> (U256, u32) {
    let digits = u32::from(digits.clamp(1, MAX_SIGNIFICANT_DIGITS));
    let length = decimal_digits(value);
    if length <= digits {
        return (value, 0);
    }

    let mut exponent = length - digits;
    let divisor = pow10(exponent);
    let mut mantissa = value / divisor;
    let remainder = value % divisor;
    if remainder >= divisor - remainder {
        mantissa += U256::from(1u8);
        if mantissa == pow10(digits) {
            mantissa = pow10(digits - 1);
            exponent += 1;
        }
    }
    (mantissa, exponent)
}

/// Returns `true` if `a` and `b` agree to `digits` significant digits.
#[must_use]
pub fn agree_to_significant_digits(a: U256, b: U256, digits: u8) -> bool {
    round_to_significant(a, digits) == round_to_significant(b, digits)
}
