//! Dual-probe solvency check and health ratio.

use tracing::trace;

use crate::config::ProtocolParams;
use crate::domain::{Liabilities, PairDecimals, Portfolio, RiskParameters, SqrtPriceX96};
use crate::solvency::{compute_solvency_basics, SolvencyBasics};

/// Outcome of [`is_solvent`].
///
/// An account is solvent only if it passes at both probe prices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolvencyReport {
    /// Human price at probe A.
    pub price_a: f64,
    /// Human price at probe B.
    pub price_b: f64,
    /// Collateral value at probe A.
    pub assets_a: f64,
    /// Collateral value at probe B.
    pub assets_b: f64,
    /// Effective liabilities at probe A.
    pub liabilities_a: f64,
    /// Effective liabilities at probe B.
    pub liabilities_b: f64,
    /// `assets_a >= liabilities_a`.
    pub solvent_at_a: bool,
    /// `assets_b >= liabilities_b`.
    pub solvent_at_b: bool,
    /// Lower of the two per-probe health ratios.
    pub health: f64,
}

impl SolvencyReport {
    /// Builds the report from precomputed basics.
    ///
    /// A probe with no effective liabilities reports `healthy_sentinel` as
    /// its health instead of dividing by zero, as does a ratio too large to
    /// represent.  Health is never NaN.
    #[must_use]
    pub fn from_basics(basics: &SolvencyBasics, params: &ProtocolParams) -> Self {
        let ratio = |assets: f64, liabilities: f64| {
            if liabilities <= 0.0 {
                return params.healthy_sentinel();
            }
            match assets / liabilities {
                r if r.is_finite() => r,
                r if r > 0.0 => params.healthy_sentinel(),
                _ => 0.0,
            }
        };
        let covers =
            |assets: f64, liabilities: f64| liabilities.is_finite() && assets >= liabilities;
        let health_a = ratio(basics.assets_a, basics.liabilities_a);
        let health_b = ratio(basics.assets_b, basics.liabilities_b);
        Self {
            price_a: basics.price_a,
            price_b: basics.price_b,
            assets_a: basics.assets_a,
            assets_b: basics.assets_b,
            liabilities_a: basics.liabilities_a,
            liabilities_b: basics.liabilities_b,
            solvent_at_a: covers(basics.assets_a, basics.liabilities_a),
            solvent_at_b: covers(basics.assets_b, basics.liabilities_b),
            health: health_a.min(health_b),
        }
    }

    /// `true` if solvent at both probe prices.
    #[must_use]
    pub const fn is_solvent(&self) -> bool {
        self.solvent_at_a && self.solvent_at_b
    }

    /// `true` if the account fails at either probe price.
    #[must_use]
    pub const fn is_liquidatable(&self) -> bool {
        !self.is_solvent()
    }
}

/// Evaluates solvency and health of an account at `mean`.
///
/// # Errors
///
/// Propagates errors from [`compute_solvency_basics`].
///
/// # Examples
///
/// ```
/// use solvency_engine::config::ProtocolParams;
/// use solvency_engine::domain::{
///     Assets, Liabilities, PairDecimals, Portfolio, RiskParameters, SqrtPriceX96,
/// };
/// use solvency_engine::solvency::is_solvent;
///
/// let portfolio = Portfolio::from_assets(Assets::new(10.0, 10.0).expect("valid"));
/// let report = is_solvent(
///     &portfolio,
///     &Liabilities::ZERO,
///     SqrtPriceX96::ONE,
///     &RiskParameters::new(0.5, 4.0),
///     PairDecimals::try_from_raw(18, 18).expect("valid"),
///     &ProtocolParams::default(),
/// )
/// .expect("in range");
/// assert!(report.is_solvent());
/// assert_eq!(report.health, 1000.0);
/// ```
pub fn is_solvent(
    portfolio: &Portfolio,
    liabilities: &Liabilities,
    mean: SqrtPriceX96,
    risk: &RiskParameters,
    decimals: PairDecimals,
    params: &ProtocolParams,
) -> crate::error::Result<SolvencyReport> {
    let basics = compute_solvency_basics(portfolio, liabilities, mean, risk, decimals, params)?;
    let report = SolvencyReport::from_basics(&basics, params);
    trace!(
        %mean,
        price_a = report.price_a,
        price_b = report.price_b,
        health = report.health,
        solvent = report.is_solvent(),
        "evaluated solvency"
    );
    Ok(report)
}
