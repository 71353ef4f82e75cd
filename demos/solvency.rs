//! Walks one margin account through the solvency engine.
//!
//! The account holds fixed balances of both tokens plus a concentrated
//! liquidity position, and owes token0.  The example prints the solvency
//! report, the borrow and withdraw limits and the liquidation thresholds.
//!
//! # Run
//!
//! ```bash
//! cargo run --example solvency
//! ```

use solvency_engine::config::{MarketConfig, ProtocolParams, ThresholdSearch};
use solvency_engine::domain::{
    Assets, Liabilities, Liquidity, PairDecimals, Portfolio, QuoteToken, RiskParameters,
    SqrtPriceX96, Tick, UniswapPosition,
};
use solvency_engine::math::tick_to_sqrt_price;
use solvency_engine::solvency::SolvencyEngine;
use solvency_engine::traits::FromConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Margin Account Solvency ===\n");

    // ── 1. Configure the market ─────────────────────────────────────────
    //    Both tokens use 18 decimals; protocol constants are the defaults.
    let decimals = PairDecimals::try_from_raw(18, 18)?;
    let config = MarketConfig::new(
        decimals,
        ProtocolParams::default(),
        ThresholdSearch::default(),
    )?;
    let engine = SolvencyEngine::from_config(&config)?;

    println!("Max leverage:          {}", config.protocol().max_leverage());
    println!(
        "Liquidation incentive: {}",
        config.protocol().liquidation_incentive()
    );

    // ── 2. Describe the account ─────────────────────────────────────────
    let position = UniswapPosition::new(
        Tick::new(-1_000)?,
        Tick::new(1_000)?,
        Liquidity::new(1_000_000_000_000_000_000_000),
    );
    let portfolio = Portfolio::new(Assets::new(80.0, 50.0)?, vec![position]);
    let liabilities = Liabilities::new(125.0, 0.0)?;

    let current_tick = Tick::new(0)?;
    let (total0, total1) = portfolio.total_amounts(current_tick, decimals)?;
    println!("\nAccount at {current_tick}:");
    println!("  Position:     {position}");
    println!("  Holdings:     token0 = {total0:.4}, token1 = {total1:.4}");
    println!(
        "  Value:        {:.4} token1",
        portfolio.value_in_token1(current_tick, decimals)?
    );
    println!("  {liabilities}");

    // ── 3. Oracle inputs ────────────────────────────────────────────────
    let mean: SqrtPriceX96 = tick_to_sqrt_price(current_tick)?;
    let risk = RiskParameters::new(0.1, 4.0);
    let probes = engine.probe_prices(mean, &risk);
    println!("\nProbe scaler: {:.6}", probes.scaler());

    // ── 4. Solvency report ──────────────────────────────────────────────
    let report = engine.is_solvent(&portfolio, &liabilities, mean, &risk)?;
    println!("\nSolvency report:");
    println!(
        "  Probe A: price {:.6}, assets {:.4}, liabilities {:.4}, solvent {}",
        report.price_a, report.assets_a, report.liabilities_a, report.solvent_at_a
    );
    println!(
        "  Probe B: price {:.6}, assets {:.4}, liabilities {:.4}, solvent {}",
        report.price_b, report.assets_b, report.liabilities_b, report.solvent_at_b
    );
    println!("  Health:  {:.6}", report.health);

    // ── 5. Limits ───────────────────────────────────────────────────────
    let (borrow0, borrow1) = engine.max_borrows(&portfolio, &liabilities, mean, &risk)?;
    let (withdraw0, withdraw1) = engine.max_withdraws(&portfolio, &liabilities, mean, &risk)?;
    let (bw0, bw1) = engine.max_borrow_and_withdraw(&portfolio, &liabilities, mean, &risk)?;
    println!("\nLimits (token0, token1):");
    println!("  Max borrow:              ({borrow0:.4}, {borrow1:.4})");
    println!("  Max withdraw:            ({withdraw0:.4}, {withdraw1:.4})");
    println!("  Max borrow-and-withdraw: ({bw0:.4}, {bw1:.4})");

    // ── 6. Liquidation thresholds ───────────────────────────────────────
    let thresholds = engine.liquidation_thresholds(&portfolio, &liabilities, mean, &risk)?;
    println!("\nLiquidation thresholds:");
    if thresholds.has_lower_threshold() {
        println!(
            "  Lower: price {:.6} ({:.2}% below mean)",
            thresholds.lower_price(decimals, QuoteToken::Token1)?.get(),
            thresholds.distance_to_lower(mean) * 100.0
        );
    } else {
        println!("  Lower: none");
    }
    if thresholds.has_upper_threshold() {
        println!(
            "  Upper: price {:.6} ({:.2}% above mean)",
            thresholds.upper_price(decimals, QuoteToken::Token1)?.get(),
            thresholds.distance_to_upper(mean) * 100.0
        );
    } else {
        println!("  Upper: none");
    }

    println!("\n=== Done ===");
    Ok(())
}
