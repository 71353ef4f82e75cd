//! Exact conversion between ticks and Q64.96 sqrt prices.
//!
//! These helpers reproduce the on-chain concentrated-liquidity tick math
//! bit for bit: `sqrt_price(tick) = sqrt(1.0001^tick) * 2^96`, evaluated
//! with precomputed 128-bit fixed-point factors, and its inverse via a
//! fixed-point binary logarithm.
//!
//! # Functions
//!
//! - [`get_sqrt_ratio_at_tick`] / [`get_tick_at_sqrt_ratio`] operate on
//!   raw integers.
//! - [`tick_to_sqrt_price`] / [`sqrt_price_to_tick`] operate on the
//!   validated domain newtypes.
//!
//! # Examples
//!
//! ```
//! use solvency_engine::domain::Tick;
//! use solvency_engine::math::{sqrt_price_to_tick, tick_to_sqrt_price};
//!
//! let tick = Tick::new(-1_234).unwrap_or(Tick::ZERO);
//! let sqrt = tick_to_sqrt_price(tick).expect("valid tick");
//! assert_eq!(sqrt_price_to_tick(sqrt), Ok(tick));
//! ```

use alloy_primitives::U256;

use crate::domain::{SqrtPriceX96, Tick, MAX_SQRT_RATIO, MAX_TICK, MIN_SQRT_RATIO, MIN_TICK};
use crate::error::SolvencyError;

/// `1 / sqrt(1.0001^(2^i))` in Q128.128 for bits 1 through 19 of `|tick|`.
const RATIO_FACTORS: [(u32, u128); 19] = [
    (0x2, 0xfff9_7272_373d_4132_59a4_6990_580e_213a),
    (0x4, 0xfff2_e50f_5f65_6932_ef12_357c_f3c7_fdcc),
    (0x8, 0xffe5_caca_7e10_e4e6_1c36_24ea_a094_1cd0),
    (0x10, 0xffcb_9843_d60f_6159_c9db_5883_5c92_6644),
    (0x20, 0xff97_3b41_fa98_c081_472e_6896_dfb2_54c0),
    (0x40, 0xff2e_a164_66c9_6a38_43ec_78b3_26b5_2861),
    (0x80, 0xfe5d_ee04_6a99_a2a8_11c4_61f1_969c_3053),
    (0x100, 0xfcbe_86c7_900a_88ae_dcff_c83b_479a_a3a4),
    (0x200, 0xf987_a725_3ac4_1317_6f2b_074c_f781_5e54),
    (0x400, 0xf339_2b08_22b7_0005_940c_7a39_8e4b_70f3),
    (0x800, 0xe715_9475_a2c2_9b74_43b2_9c7f_a6e8_89d9),
    (0x1000, 0xd097_f3bd_fd20_22b8_845a_d8f7_92aa_5825),
    (0x2000, 0xa9f7_4646_2d87_0fdf_8a65_dc1f_90e0_61e5),
    (0x4000, 0x70d8_69a1_56d2_a1b8_90bb_3df6_2baf_32f7),
    (0x8000, 0x31be_135f_97d0_8fd9_8123_1505_542f_cfa6),
    (0x10000, 0x09aa_508b_5b7a_84e1_c677_de54_f3e9_9bc9),
    (0x20000, 0x005d_6af8_dedb_8119_6699_c329_225e_e604),
    (0x40000, 0x0000_2216_e584_f5fa_1ea9_2604_1bed_fe98),
    (0x80000, 0x0000_0000_0004_8a17_0391_f7dc_4244_4e8f_a2),
];

/// Factor for bit 0 of `|tick|`.
const RATIO_BIT0: u128 = 0xfffc_b933_bd6f_ad37_aa2d_162d_1a59_4001;

/// `log_sqrt(1.0001)(2)` in Q128.128, applied to a Q64.64 base-2 logarithm.
const LOG_SQRT_10001: u128 = 255_738_958_999_603_826_347_141;

/// Lower error bound of the logarithm, in Q128.128.
const TICK_LOW_OFFSET: u128 = 3_402_992_956_809_132_418_596_140_100_660_247_210;

/// Upper error bound of the logarithm, in Q128.128.
const TICK_HIGH_OFFSET: u128 = 291_339_464_771_989_622_907_027_621_153_398_088_495;

/// Number of fractional log bits computed (63 down to 50).
const LOG_FRACTION_BITS: usize = 14;

/// Computes `sqrt(1.0001^tick) * 2^96`, rounded up.
///
/// # Errors
///
/// Returns [`SolvencyError::OutOfRange`] if `|tick| > MAX_TICK`.
pub fn get_sqrt_ratio_at_tick(tick: i32) -> crate::error::Result<U256> {
    let abs_tick = tick.unsigned_abs();
    if abs_tick > MAX_TICK.unsigned_abs() {
        return Err(SolvencyError::OutOfRange(
            "tick out of range [-887272, 887272]",
        ));
    }

    let mut ratio = if abs_tick & 0x1 != 0 {
        U256::from(RATIO_BIT0)
    } else {
        U256::from(1u8) << 128_usize
    };
    for (mask, factor) in RATIO_FACTORS {
        if abs_tick & mask != 0 {
            ratio = (ratio * U256::from(factor)) >> 128_usize;
        }
    }
    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Q128.128 -> Q128.96, rounding up.
    let low_mask = (U256::from(1u8) << 32_usize) - U256::from(1u8);
    let round_up = !(ratio & low_mask).is_zero();
    let mut sqrt = ratio >> 32_usize;
    if round_up {
        sqrt += U256::from(1u8);
    }
    Ok(sqrt)
}

/// Computes the greatest tick whose sqrt ratio is `<= sqrt_price_x96`.
///
/// Accepts the closed interval `[MIN_SQRT_RATIO, MAX_SQRT_RATIO]`;
/// `MAX_SQRT_RATIO` maps to `MAX_TICK`.
///
/// # Errors
///
/// Returns [`SolvencyError::OutOfRange`] outside that interval.
pub fn get_tick_at_sqrt_ratio(sqrt_price_x96: U256) -> crate::error::Result<i32> {
    if sqrt_price_x96 < MIN_SQRT_RATIO || sqrt_price_x96 > MAX_SQRT_RATIO {
        return Err(SolvencyError::OutOfRange(
            "sqrt price out of range [MIN_SQRT_RATIO, MAX_SQRT_RATIO]",
        ));
    }
    if sqrt_price_x96 == MAX_SQRT_RATIO {
        return Ok(MAX_TICK);
    }

    let ratio = sqrt_price_x96 << 32_usize;
    let msb = ratio.bit_len() - 1;
    let mut r = if msb >= 128 {
        ratio >> (msb - 127)
    } else {
        ratio << (127 - msb)
    };

    let mut fraction: u64 = 0;
    for i in 0..LOG_FRACTION_BITS {
        r = (r * r) >> 127_usize;
        if !(r >> 128_usize).is_zero() {
            fraction |= 1u64 << (63 - i);
            r >>= 1_usize;
        }
    }

    // log_sqrt10001 = (msb - 128) * 2^64 * C + fraction * C, kept
    // non-negative by a 2^192 bias so every step stays unsigned.
    let bias = U256::from(1u8) << 192_usize;
    let c = U256::from(LOG_SQRT_10001);
    let fraction_term = U256::from(fraction) * c;
    let biased = if msb >= 128 {
        bias + ((U256::from(msb - 128) * c) << 64_usize) + fraction_term
    } else {
        bias - ((U256::from(128 - msb) * c) << 64_usize) + fraction_term
    };

    let tick_low = unbias_tick(biased - U256::from(TICK_LOW_OFFSET))?;
    let tick_high = unbias_tick(biased + U256::from(TICK_HIGH_OFFSET))?;

    if tick_low == tick_high {
        return Ok(tick_low);
    }
    if tick_high <= MAX_TICK && get_sqrt_ratio_at_tick(tick_high)? <= sqrt_price_x96 {
        Ok(tick_high)
    } else {
        Ok(tick_low)
    }
}

/// Floors a biased Q128.128 tick to an integer and removes the bias.
fn unbias_tick(biased: U256) -> crate::error::Result<i32> {
    let shifted = biased >> 128_usize;
    let [lo, hi, _, _] = *shifted.as_limbs();
    let unsigned = (u128::from(hi) << 64) | u128::from(lo);
    let signed = i128::try_from(unsigned)
        .map_err(|_| SolvencyError::Overflow("tick logarithm out of range"))?
        - (1i128 << 64);
    i32::try_from(signed).map_err(|_| SolvencyError::Overflow("tick logarithm out of range"))
}

/// Sqrt price of a validated tick.
///
/// # Errors
///
/// Never fails for a valid [`Tick`]; the `Result` mirrors the raw helper.
pub fn tick_to_sqrt_price(tick: Tick) -> crate::error::Result<SqrtPriceX96> {
    SqrtPriceX96::new(get_sqrt_ratio_at_tick(tick.get())?)
}

/// Greatest tick whose sqrt price is `<= sqrt_price`.
///
/// # Errors
///
/// Never fails for a valid [`SqrtPriceX96`]; the `Result` mirrors the raw
/// helper.
pub fn sqrt_price_to_tick(sqrt_price: SqrtPriceX96) -> crate::error::Result<Tick> {
    let tick = get_tick_at_sqrt_ratio(sqrt_price.get())?;
    debug_assert!((MIN_TICK..=MAX_TICK).contains(&tick));
    Tick::new(tick)
}
