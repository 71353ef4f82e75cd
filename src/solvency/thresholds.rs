//! Liquidation price thresholds by bisection over the sqrt-price axis.
//!
//! For each direction the search first asks whether the account is still
//! solvent at the protocol bound itself; if so, the bound is the answer.
//! Otherwise it bisects between the mean and the bound, moving the
//! liquidatable end toward the mean whenever the midpoint is liquidatable
//! and the safe end outward otherwise.  It stops when two consecutive
//! midpoints agree to the configured number of significant digits, or
//! after the iteration limit, and returns the last midpoint.

use alloy_primitives::U256;
use tracing::{debug, trace};

use crate::config::{ProtocolParams, ThresholdSearch};
use crate::domain::{
    Liabilities, PairDecimals, Portfolio, Price, QuoteToken, RiskParameters, SqrtPriceX96,
};
use crate::math::{agree_to_significant_digits, sqrt_price_to_price, u256_to_f64};
use crate::solvency::is_solvent;
use crate::traits::SolvencyOracle;

/// Everything needed to re-evaluate an account at arbitrary mean prices.
#[derive(Debug, Clone, Copy)]
pub struct AccountSnapshot<'a> {
    portfolio: &'a Portfolio,
    liabilities: Liabilities,
    risk: RiskParameters,
    decimals: PairDecimals,
    params: ProtocolParams,
}

impl<'a> AccountSnapshot<'a> {
    /// Captures an account and its market parameters.
    #[must_use]
    pub const fn new(
        portfolio: &'a Portfolio,
        liabilities: Liabilities,
        risk: RiskParameters,
        decimals: PairDecimals,
        params: ProtocolParams,
    ) -> Self {
        Self {
            portfolio,
            liabilities,
            risk,
            decimals,
            params,
        }
    }

    /// Borrowed portfolio.
    #[must_use]
    pub const fn portfolio(&self) -> &'a Portfolio {
        self.portfolio
    }

    /// Account debt.
    #[must_use]
    pub const fn liabilities(&self) -> &Liabilities {
        &self.liabilities
    }

    /// Token decimals of the market.
    #[must_use]
    pub const fn decimals(&self) -> PairDecimals {
        self.decimals
    }
}

impl SolvencyOracle for AccountSnapshot<'_> {
    fn is_solvent_at(&self, sqrt_price: SqrtPriceX96) -> crate::error::Result<bool> {
        let report = is_solvent(
            self.portfolio,
            &self.liabilities,
            sqrt_price,
            &self.risk,
            self.decimals,
            &self.params,
        )?;
        Ok(report.is_solvent())
    }
}

/// Result of one directional search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Threshold sqrt price, between the mean and the searched bound.
    pub threshold: SqrtPriceX96,
    /// Bisection steps taken; zero when the bound itself is solvent.
    pub iterations: u32,
    /// `false` only if the iteration limit ended the search.
    pub converged: bool,
}

/// Finds where `oracle` flips between `mean` and `bound`.
///
/// `bound` may lie on either side of `mean`.  The returned threshold always
/// lies in the closed interval between them.
///
/// # Errors
///
/// Propagates oracle errors.
pub fn search_threshold<O: SolvencyOracle + ?Sized>(
    oracle: &O,
    mean: SqrtPriceX96,
    bound: SqrtPriceX96,
    search: &ThresholdSearch,
) -> crate::error::Result<SearchOutcome> {
    if oracle.is_solvent_at(bound)? {
        debug!(%bound, "solvent at protocol bound, no threshold in range");
        return Ok(SearchOutcome {
            threshold: bound,
            iterations: 0,
            converged: true,
        });
    }

    let mut safe = mean;
    let mut liquidatable = bound;
    let mut previous = U256::ZERO;
    let mut mid = safe.midpoint(&liquidatable);
    let mut iterations = 0;
    let mut converged = false;

    while iterations < search.iterations() {
        iterations += 1;
        mid = safe.midpoint(&liquidatable);
        let solvent = oracle.is_solvent_at(mid)?;
        trace!(iteration = iterations, %mid, solvent, "threshold bisection step");
        if solvent {
            safe = mid;
        } else {
            liquidatable = mid;
        }
        if agree_to_significant_digits(mid.get(), previous, search.precision_digits()) {
            converged = true;
            break;
        }
        previous = mid.get();
    }

    debug!(%mid, iterations, converged, "threshold search finished");
    Ok(SearchOutcome {
        threshold: mid,
        iterations,
        converged,
    })
}

/// Lower and upper liquidation sqrt prices of an account.
///
/// `lower == min` means the account stays solvent all the way down to the
/// protocol floor; `upper == max` likewise toward the ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiquidationThresholds {
    lower: SqrtPriceX96,
    upper: SqrtPriceX96,
    min: SqrtPriceX96,
    max: SqrtPriceX96,
}

impl LiquidationThresholds {
    /// Liquidation sqrt price below the mean.
    #[must_use]
    pub const fn lower_sqrt_ratio(&self) -> SqrtPriceX96 {
        self.lower
    }

    /// Liquidation sqrt price above the mean.
    #[must_use]
    pub const fn upper_sqrt_ratio(&self) -> SqrtPriceX96 {
        self.upper
    }

    /// Protocol floor used by the search.
    #[must_use]
    pub const fn min_sqrt_ratio(&self) -> SqrtPriceX96 {
        self.min
    }

    /// Protocol ceiling used by the search.
    #[must_use]
    pub const fn max_sqrt_ratio(&self) -> SqrtPriceX96 {
        self.max
    }

    /// `true` if a falling price can liquidate the account.
    #[must_use]
    pub fn has_lower_threshold(&self) -> bool {
        self.lower != self.min
    }

    /// `true` if a rising price can liquidate the account.
    #[must_use]
    pub fn has_upper_threshold(&self) -> bool {
        self.upper != self.max
    }

    /// Human price at the lower threshold.
    ///
    /// # Errors
    ///
    /// See [`sqrt_price_to_price`].
    pub fn lower_price(
        &self,
        decimals: PairDecimals,
        quote: QuoteToken,
    ) -> crate::error::Result<Price> {
        sqrt_price_to_price(self.lower, decimals, quote)
    }

    /// Human price at the upper threshold.
    ///
    /// # Errors
    ///
    /// See [`sqrt_price_to_price`].
    pub fn upper_price(
        &self,
        decimals: PairDecimals,
        quote: QuoteToken,
    ) -> crate::error::Result<Price> {
        sqrt_price_to_price(self.upper, decimals, quote)
    }

    /// Fractional price drop from `mean` to the lower threshold, in `[0, 1]`.
    #[must_use]
    pub fn distance_to_lower(&self, mean: SqrtPriceX96) -> f64 {
        let ratio = price_ratio(self.lower, mean);
        (1.0 - ratio).max(0.0)
    }

    /// Fractional price rise from `mean` to the upper threshold, `>= 0`.
    #[must_use]
    pub fn distance_to_upper(&self, mean: SqrtPriceX96) -> f64 {
        let ratio = price_ratio(self.upper, mean);
        (ratio - 1.0).max(0.0)
    }
}

/// `(sqrt / mean)^2`; decimals cancel out of the ratio.
fn price_ratio(sqrt: SqrtPriceX96, mean: SqrtPriceX96) -> f64 {
    let r = u256_to_f64(sqrt.get()) / u256_to_f64(mean.get());
    r * r
}

/// Searches below and above `mean` for the prices at which `oracle` turns
/// liquidatable.
///
/// # Errors
///
/// Propagates oracle errors.
pub fn find_liquidation_thresholds<O: SolvencyOracle + ?Sized>(
    oracle: &O,
    mean: SqrtPriceX96,
    search: &ThresholdSearch,
) -> crate::error::Result<LiquidationThresholds> {
    let lower = search_threshold(oracle, mean, SqrtPriceX96::MIN, search)?;
    let upper = search_threshold(oracle, mean, SqrtPriceX96::MAX, search)?;
    Ok(LiquidationThresholds {
        lower: lower.threshold,
        upper: upper.threshold,
        min: SqrtPriceX96::MIN,
        max: SqrtPriceX96::MAX,
    })
}

/// Liquidation thresholds of an account around `mean`.
///
/// # Errors
///
/// Propagates valuation errors.
///
/// # Examples
///
/// ```
/// use solvency_engine::config::{ProtocolParams, ThresholdSearch};
/// use solvency_engine::domain::{
///     Assets, Liabilities, PairDecimals, Portfolio, RiskParameters, SqrtPriceX96,
/// };
/// use solvency_engine::solvency::compute_liquidation_thresholds;
///
/// let portfolio = Portfolio::from_assets(Assets::new(0.0, 100.0).expect("valid"));
/// let liabilities = Liabilities::new(5.0, 0.0).expect("valid");
/// let thresholds = compute_liquidation_thresholds(
///     &portfolio,
///     &liabilities,
///     SqrtPriceX96::ONE,
///     &RiskParameters::new(0.5, 4.0),
///     PairDecimals::try_from_raw(18, 18).expect("valid"),
///     &ProtocolParams::default(),
///     &ThresholdSearch::default(),
/// )
/// .expect("in range");
/// assert!(!thresholds.has_lower_threshold());
/// assert!(thresholds.has_upper_threshold());
/// ```
pub fn compute_liquidation_thresholds(
    portfolio: &Portfolio,
    liabilities: &Liabilities,
    mean: SqrtPriceX96,
    risk: &RiskParameters,
    decimals: PairDecimals,
    params: &ProtocolParams,
    search: &ThresholdSearch,
) -> crate::error::Result<LiquidationThresholds> {
    let snapshot = AccountSnapshot::new(portfolio, *liabilities, *risk, decimals, *params);
    find_liquidation_thresholds(&snapshot, mean, search)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::error::SolvencyError;

    fn sqrt_from_f64(ratio: f64) -> SqrtPriceX96 {
        // Coarse: test-only construction of a sqrt price near `ratio`.
        let scaled = ratio * 2f64.powi(48);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let whole = U256::from(scaled as u128) << 48_usize;
        SqrtPriceX96::clamped(whole)
    }

    #[test]
    fn solvent_at_bound_short_circuits() {
        let always = |_: SqrtPriceX96| -> crate::error::Result<bool> { Ok(true) };
        let Ok(out) = search_threshold(
            &always,
            SqrtPriceX96::ONE,
            SqrtPriceX96::MIN,
            &ThresholdSearch::default(),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(out.threshold, SqrtPriceX96::MIN);
        assert_eq!(out.iterations, 0);
        assert!(out.converged);
    }

    #[test]
    fn finds_synthetic_lower_threshold() {
        let cutoff = sqrt_from_f64(0.5);
        let oracle = move |p: SqrtPriceX96| -> crate::error::Result<bool> { Ok(p >= cutoff) };
        let Ok(out) = search_threshold(
            &oracle,
            SqrtPriceX96::ONE,
            SqrtPriceX96::MIN,
            &ThresholdSearch::default(),
        ) else {
            panic!("expected Ok");
        };
        assert!(out.converged);
        let found = u256_to_f64(out.threshold.get());
        let want = u256_to_f64(cutoff.get());
        assert!((found - want).abs() / want < 1e-5);
    }

    #[test]
    fn finds_synthetic_upper_threshold() {
        let cutoff = sqrt_from_f64(3.0);
        let oracle = move |p: SqrtPriceX96| -> crate::error::Result<bool> { Ok(p <= cutoff) };
        let Ok(out) = search_threshold(
            &oracle,
            SqrtPriceX96::ONE,
            SqrtPriceX96::MAX,
            &ThresholdSearch::default(),
        ) else {
            panic!("expected Ok");
        };
        let found = u256_to_f64(out.threshold.get());
        let want = u256_to_f64(cutoff.get());
        assert!((found - want).abs() / want < 1e-5);
        assert!(out.threshold >= SqrtPriceX96::ONE);
    }

    #[test]
    fn iteration_limit_ends_search() {
        let cutoff = sqrt_from_f64(0.5);
        let oracle = move |p: SqrtPriceX96| -> crate::error::Result<bool> { Ok(p >= cutoff) };
        let Ok(search) = ThresholdSearch::new(3, 30) else {
            panic!("valid search");
        };
        let Ok(out) = search_threshold(&oracle, SqrtPriceX96::ONE, SqrtPriceX96::MIN, &search)
        else {
            panic!("expected Ok");
        };
        assert_eq!(out.iterations, 3);
        assert!(!out.converged);
        assert!(out.threshold >= SqrtPriceX96::MIN && out.threshold <= SqrtPriceX96::ONE);
    }

    #[test]
    fn oracle_errors_propagate() {
        let failing = |_: SqrtPriceX96| -> crate::error::Result<bool> {
            Err(SolvencyError::Overflow("synthetic"))
        };
        let result = find_liquidation_thresholds(
            &failing,
            SqrtPriceX96::ONE,
            &ThresholdSearch::default(),
        );
        assert_eq!(result, Err(SolvencyError::Overflow("synthetic")));
    }

    #[test]
    fn liquidatable_everywhere_collapses_to_mean() {
        let never = |_: SqrtPriceX96| -> crate::error::Result<bool> { Ok(false) };
        let mean = SqrtPriceX96::ONE;
        let Ok(t) = find_liquidation_thresholds(&never, mean, &ThresholdSearch::default()) else {
            panic!("expected Ok");
        };
        assert!(t.lower_sqrt_ratio() <= mean && mean <= t.upper_sqrt_ratio());
        assert!(t.distance_to_lower(mean) < 1e-5);
        assert!(t.distance_to_upper(mean) < 1e-5);
    }

    #[test]
    fn distances() {
        let t = LiquidationThresholds {
            lower: sqrt_from_f64(0.5),
            upper: sqrt_from_f64(2.0),
            min: SqrtPriceX96::MIN,
            max: SqrtPriceX96::MAX,
        };
        assert!((t.distance_to_lower(SqrtPriceX96::ONE) - 0.75).abs() < 1e-9);
        assert!((t.distance_to_upper(SqrtPriceX96::ONE) - 3.0).abs() < 1e-9);
        assert!(t.has_lower_threshold() && t.has_upper_threshold());
    }
}
