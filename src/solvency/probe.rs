//! Volatility-sized stress prices around the mean price.

use alloy_primitives::U256;
use fixed::types::U64F64;

use crate::config::ProtocolParams;
use crate::domain::{RiskParameters, Rounding, SqrtPriceX96};
use crate::math::mul_div;

/// `2^64`, the unit of a Q64.64 scaler.
const Q64: U256 = U256::from_limbs([0, 1, 0, 0]);

/// The two sqrt prices at which solvency is checked.
///
/// Always `MIN_SQRT_RATIO <= a <= mean <= b <= MAX_SQRT_RATIO`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbePrices {
    a: SqrtPriceX96,
    b: SqrtPriceX96,
    scaler: f64,
}

impl ProbePrices {
    /// Downward stress price.
    #[must_use]
    pub const fn a(&self) -> SqrtPriceX96 {
        self.a
    }

    /// Upward stress price.
    #[must_use]
    pub const fn b(&self) -> SqrtPriceX96 {
        self.b
    }

    /// Clamped sqrt-price scaler that produced `a` and `b`.
    #[must_use]
    pub const fn scaler(&self) -> f64 {
        self.scaler
    }
}

/// `exp(n_sigma * iv / 2)` clamped into the protocol scaler bounds.
///
/// A NaN input selects the upper bound.
#[must_use]
pub fn probe_scaler(risk: &RiskParameters, params: &ProtocolParams) -> f64 {
    let raw = (risk.n_sigma() * risk.implied_volatility() / 2.0).exp();
    if raw.is_nan() {
        return params.probe_scaler_max();
    }
    raw.max(params.probe_scaler_min()).min(params.probe_scaler_max())
}

/// Computes the probe sqrt prices `mean / scaler` and `mean * scaler`.
///
/// The scaler is applied as an unsigned Q64.64 number so the sqrt price
/// arithmetic stays integral.  Results saturate at the protocol bounds;
/// there is no error path.
///
/// # Examples
///
/// ```
/// use solvency_engine::config::ProtocolParams;
/// use solvency_engine::domain::{RiskParameters, SqrtPriceX96};
/// use solvency_engine::solvency::compute_probe_prices;
///
/// let risk = RiskParameters::new(0.5, 4.0);
/// let probes = compute_probe_prices(SqrtPriceX96::ONE, &risk, &ProtocolParams::default());
/// assert!(probes.a() < SqrtPriceX96::ONE && SqrtPriceX96::ONE < probes.b());
/// ```
#[must_use]
pub fn compute_probe_prices(
    mean: SqrtPriceX96,
    risk: &RiskParameters,
    params: &ProtocolParams,
) -> ProbePrices {
    let scaler = probe_scaler(risk, params);
    let scaler_q64 = U256::from(U64F64::saturating_from_num(scaler).to_bits());

    let a = mul_div(mean.get(), Q64, scaler_q64, Rounding::Down)
        .map_or(SqrtPriceX96::MIN, SqrtPriceX96::clamped);
    let b = mul_div(mean.get(), scaler_q64, Q64, Rounding::Down)
        .map_or(SqrtPriceX96::MAX, SqrtPriceX96::clamped);

    ProbePrices { a, b, scaler }
}
