//! Sqrt price to human price conversion.

use crate::domain::{PairDecimals, Price, QuoteToken, SqrtPriceX96, Tick};
use crate::math::full_math::{limbs_to_f64, widen};
use crate::math::tick_to_sqrt_price;

/// Converts a sqrt price into a human price.
///
/// The raw ratio `(sqrt / 2^96)^2` is squared exactly in 512 bits, then
/// scaled by `10^(decimals0 - decimals1)`.  With [`QuoteToken::Token1`]
/// the result is the price of one token0 in token1; with
/// [`QuoteToken::Token0`] it is the reciprocal.
///
/// # Errors
///
/// Returns [`SolvencyError::OutOfRange`](crate::error::SolvencyError::OutOfRange)
/// if the scaled price is not a finite positive `f64`.
///
/// # Examples
///
/// ```
/// use solvency_engine::domain::{PairDecimals, QuoteToken, SqrtPriceX96};
/// use solvency_engine::math::sqrt_price_to_price;
///
/// let decimals = PairDecimals::try_from_raw(18, 6).expect("valid");
/// let price = sqrt_price_to_price(SqrtPriceX96::ONE, decimals, QuoteToken::Token1)
///     .expect("in range");
/// assert!((price.get() - 1e12).abs() < 1.0);
/// ```
pub fn sqrt_price_to_price(
    sqrt_price: SqrtPriceX96,
    decimals: PairDecimals,
    quote: QuoteToken,
) -> crate::error::Result<Price> {
    let wide = widen(sqrt_price.get());
    let squared = wide * wide;
    let raw = limbs_to_f64(squared.as_limbs()) * 2f64.powi(-192);
    let price = Price::new(raw * decimals.price_scale())?;
    if quote.is_token0() {
        price.inverse()
    } else {
        Ok(price)
    }
}

/// Human price at a tick.
///
/// # Errors
///
/// See [`sqrt_price_to_price`].
pub fn tick_to_price(
    tick: Tick,
    decimals: PairDecimals,
    quote: QuoteToken,
) -> crate::error::Result<Price> {
    sqrt_price_to_price(tick_to_sqrt_price(tick)?, decimals, quote)
}
