//! Market-bound facade over the free solvency functions.

use crate::config::MarketConfig;
use crate::domain::{Liabilities, Portfolio, RiskParameters, SqrtPriceX96};
use crate::solvency::{
    compute_probe_prices, compute_solvency_basics, find_liquidation_thresholds, is_solvent,
    max_borrow_and_withdraw, max_borrows, max_withdraws, AccountSnapshot, LiquidationThresholds,
    ProbePrices, SolvencyBasics, SolvencyReport,
};
use crate::traits::FromConfig;

/// Solvency engine for one market.
///
/// Holds a validated [`MarketConfig`] so callers pass only the account,
/// the mean price and the oracle's risk inputs.  Every method is a pure
/// function of its arguments and the bound configuration; the engine can
/// be shared freely across threads.
///
/// # Examples
///
/// ```
/// use solvency_engine::config::MarketConfig;
/// use solvency_engine::domain::{
///     Assets, Liabilities, PairDecimals, Portfolio, RiskParameters, SqrtPriceX96,
/// };
/// use solvency_engine::solvency::SolvencyEngine;
/// use solvency_engine::traits::FromConfig;
///
/// let decimals = PairDecimals::try_from_raw(18, 18).expect("valid decimals");
/// let engine = SolvencyEngine::from_config(&MarketConfig::with_decimals(decimals))
///     .expect("valid config");
/// let portfolio = Portfolio::from_assets(Assets::new(1_000.0, 1_000.0).expect("valid"));
/// let liabilities = Liabilities::new(400.0, 0.0).expect("valid");
/// let risk = RiskParameters::new(0.5, 4.0);
///
/// let report = engine
///     .is_solvent(&portfolio, &liabilities, SqrtPriceX96::ONE, &risk)
///     .expect("in range");
/// assert!(report.is_solvent());
/// let (_, borrow1) = engine
///     .max_borrows(&portfolio, &liabilities, SqrtPriceX96::ONE, &risk)
///     .expect("in range");
/// assert!(borrow1 > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolvencyEngine {
    config: MarketConfig,
}

impl SolvencyEngine {
    /// Binds a validated market configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SolvencyError::InvalidConfiguration`](crate::error::SolvencyError::InvalidConfiguration)
    /// if `config` fails validation.
    pub fn new(config: MarketConfig) -> crate::error::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The bound configuration.
    #[must_use]
    pub const fn config(&self) -> &MarketConfig {
        &self.config
    }

    /// Probe sqrt prices around `mean`.
    #[must_use]
    pub fn probe_prices(&self, mean: SqrtPriceX96, risk: &RiskParameters) -> ProbePrices {
        compute_probe_prices(mean, risk, self.config.protocol())
    }

    /// See [`compute_solvency_basics`].
    ///
    /// # Errors
    ///
    /// Propagates valuation errors.
    pub fn solvency_basics(
        &self,
        portfolio: &Portfolio,
        liabilities: &Liabilities,
        mean: SqrtPriceX96,
        risk: &RiskParameters,
    ) -> crate::error::Result<SolvencyBasics> {
        compute_solvency_basics(
            portfolio,
            liabilities,
            mean,
            risk,
            self.config.decimals(),
            self.config.protocol(),
        )
    }

    /// See [`is_solvent`].
    ///
    /// # Errors
    ///
    /// Propagates valuation errors.
    pub fn is_solvent(
        &self,
        portfolio: &Portfolio,
        liabilities: &Liabilities,
        mean: SqrtPriceX96,
        risk: &RiskParameters,
    ) -> crate::error::Result<SolvencyReport> {
        is_solvent(
            portfolio,
            liabilities,
            mean,
            risk,
            self.config.decimals(),
            self.config.protocol(),
        )
    }

    /// See [`max_borrows`].
    ///
    /// # Errors
    ///
    /// Propagates valuation errors.
    pub fn max_borrows(
        &self,
        portfolio: &Portfolio,
        liabilities: &Liabilities,
        mean: SqrtPriceX96,
        risk: &RiskParameters,
    ) -> crate::error::Result<(f64, f64)> {
        let basics = self.solvency_basics(portfolio, liabilities, mean, risk)?;
        Ok(max_borrows(&basics, self.config.protocol()))
    }

    /// See [`max_withdraws`].
    ///
    /// # Errors
    ///
    /// Propagates valuation errors.
    pub fn max_withdraws(
        &self,
        portfolio: &Portfolio,
        liabilities: &Liabilities,
        mean: SqrtPriceX96,
        risk: &RiskParameters,
    ) -> crate::error::Result<(f64, f64)> {
        let basics = self.solvency_basics(portfolio, liabilities, mean, risk)?;
        Ok(max_withdraws(&basics, self.config.protocol()))
    }

    /// See [`max_borrow_and_withdraw`].
    ///
    /// # Errors
    ///
    /// Propagates valuation errors.
    pub fn max_borrow_and_withdraw(
        &self,
        portfolio: &Portfolio,
        liabilities: &Liabilities,
        mean: SqrtPriceX96,
        risk: &RiskParameters,
    ) -> crate::error::Result<(f64, f64)> {
        let basics = self.solvency_basics(portfolio, liabilities, mean, risk)?;
        Ok(max_borrow_and_withdraw(&basics, self.config.protocol()))
    }

    /// Captures an account for repeated evaluation at different prices.
    #[must_use]
    pub fn snapshot<'a>(
        &self,
        portfolio: &'a Portfolio,
        liabilities: &Liabilities,
        risk: &RiskParameters,
    ) -> AccountSnapshot<'a> {
        AccountSnapshot::new(
            portfolio,
            *liabilities,
            *risk,
            self.config.decimals(),
            *self.config.protocol(),
        )
    }

    /// See [`compute_liquidation_thresholds`](crate::solvency::compute_liquidation_thresholds).
    ///
    /// # Errors
    ///
    /// Propagates valuation errors.
    pub fn liquidation_thresholds(
        &self,
        portfolio: &Portfolio,
        liabilities: &Liabilities,
        mean: SqrtPriceX96,
        risk: &RiskParameters,
    ) -> crate::error::Result<LiquidationThresholds> {
        let snapshot = self.snapshot(portfolio, liabilities, risk);
        find_liquidation_thresholds(&snapshot, mean, self.config.search())
    }
}

impl FromConfig<MarketConfig> for SolvencyEngine {
    fn from_config(config: &MarketConfig) -> crate::error::Result<Self> {
        Self::new(*config)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::{ProtocolParams, ThresholdSearch};
    use crate::domain::{Assets, PairDecimals};
    use crate::traits::SolvencyOracle;

    fn engine() -> SolvencyEngine {
        let Ok(decimals) = PairDecimals::try_from_raw(18, 6) else {
            panic!("valid decimals");
        };
        let Ok(engine) = SolvencyEngine::from_config(&MarketConfig::with_decimals(decimals)) else {
            panic!("valid config");
        };
        engine
    }

    #[test]
    fn from_config_keeps_config() {
        let e = engine();
        assert_eq!(e.config().decimals().token1().get(), 6);
        assert_eq!(*e.config().search(), ThresholdSearch::default());
        assert_eq!(*e.config().protocol(), ProtocolParams::default());
    }

    #[test]
    fn snapshot_matches_report() {
        let e = engine();
        let Ok(assets) = Assets::new(2.0, 5_000.0) else {
            panic!("valid assets");
        };
        let portfolio = Portfolio::from_assets(assets);
        let Ok(liabilities) = Liabilities::new(0.0, 3_000.0) else {
            panic!("valid liabilities");
        };
        let risk = RiskParameters::new(0.8, 5.0);
        let mean = SqrtPriceX96::ONE;
        let Ok(report) = e.is_solvent(&portfolio, &liabilities, mean, &risk) else {
            panic!("expected Ok");
        };
        let snapshot = e.snapshot(&portfolio, &liabilities, &risk);
        assert_eq!(snapshot.is_solvent_at(mean), Ok(report.is_solvent()));
        assert_eq!(snapshot.liabilities(), &liabilities);
        assert_eq!(snapshot.portfolio(), &portfolio);
    }

    #[test]
    fn thresholds_bracket_mean() {
        let e = engine();
        let Ok(assets) = Assets::new(1.0, 10_000.0) else {
            panic!("valid assets");
        };
        let portfolio = Portfolio::from_assets(assets);
        let Ok(liabilities) = Liabilities::new(0.0, 9_000.0) else {
            panic!("valid liabilities");
        };
        let risk = RiskParameters::new(0.3, 4.0);
        let mean = SqrtPriceX96::ONE;
        let Ok(t) = e.liquidation_thresholds(&portfolio, &liabilities, mean, &risk) else {
            panic!("expected Ok");
        };
        assert!(t.min_sqrt_ratio() <= t.lower_sqrt_ratio());
        assert!(t.lower_sqrt_ratio() <= mean);
        assert!(mean <= t.upper_sqrt_ratio());
        assert!(t.upper_sqrt_ratio() <= t.max_sqrt_ratio());
    }
}
