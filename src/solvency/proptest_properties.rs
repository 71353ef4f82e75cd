//! Property-based tests using `proptest` for engine invariants.
//!
//! 1. **Tick round-trip**: `tick(sqrt(t)) == t` for every valid tick.
//! 2. **Probe bracketing**: `MIN <= a <= mean <= b <= MAX` for any inputs.
//! 3. **Valuation consistency**: token1 value equals `a0 * price + a1`.
//! 4. **Zero-liquidity idempotence**: empty positions are worth nothing.
//! 5. **Health monotonicity**: more collateral never hurts, more debt
//!    never helps.
//! 6. **Threshold bracketing**: `lower <= mean <= upper`.
//! 7. **No NaN health**: extreme balances at extreme prices stay finite.

use alloy_primitives::U256;
use proptest::prelude::*;

use crate::config::{ProtocolParams, ThresholdSearch};
use crate::domain::{
    Assets, Liabilities, Liquidity, PairDecimals, Portfolio, QuoteToken, RiskParameters,
    SqrtPriceX96, Tick, UniswapPosition, MAX_AMOUNT, MAX_TICK, MIN_TICK,
};
use crate::math::{
    amounts_for_liquidity, get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio, tick_to_price,
    value_of_liquidity_in_token1,
};
use crate::solvency::{compute_liquidation_thresholds, compute_probe_prices, is_solvent};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn decimals() -> PairDecimals {
    let Ok(d) = PairDecimals::try_from_raw(18, 18) else {
        panic!("valid decimals");
    };
    d
}

fn tick(v: i32) -> Tick {
    let Ok(t) = Tick::new(v) else {
        panic!("valid tick expected");
    };
    t
}

fn sqrt_near_tick(t: i32, offset: u64) -> SqrtPriceX96 {
    let Ok(base) = get_sqrt_ratio_at_tick(t) else {
        panic!("valid tick");
    };
    SqrtPriceX96::clamped(base.saturating_add(U256::from(offset)))
}

fn health(fixed0: f64, fixed1: f64, debt0: f64, debt1: f64, mean: SqrtPriceX96) -> f64 {
    let Ok(assets) = Assets::new(fixed0, fixed1) else {
        panic!("valid assets");
    };
    let Ok(liabilities) = Liabilities::new(debt0, debt1) else {
        panic!("valid liabilities");
    };
    let Ok(report) = is_solvent(
        &Portfolio::from_assets(assets),
        &liabilities,
        mean,
        &RiskParameters::new(0.6, 4.0),
        decimals(),
        &ProtocolParams::default(),
    ) else {
        panic!("expected Ok");
    };
    report.health
}

fn tick_strategy() -> impl Strategy<Value = i32> {
    MIN_TICK..=MAX_TICK
}

fn amount_strategy() -> impl Strategy<Value = f64> {
    0.0f64..1e9
}

fn extreme_amount_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(f64::MIN_POSITIVE),
        Just(MAX_AMOUNT),
        0.0f64..=MAX_AMOUNT,
    ]
}

fn edge_tick_strategy() -> impl Strategy<Value = i32> {
    prop_oneof![
        MIN_TICK..MIN_TICK + 1_000,
        MAX_TICK - 1_000..=MAX_TICK,
        tick_strategy(),
    ]
}

// ---------------------------------------------------------------------------
// Property 1: Tick round-trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_tick_round_trip(t in tick_strategy()) {
        let Ok(sqrt) = get_sqrt_ratio_at_tick(t) else {
            panic!("valid tick");
        };
        prop_assert_eq!(get_tick_at_sqrt_ratio(sqrt), Ok(t));
    }

    #[test]
    fn prop_tick_at_sqrt_is_floor(t in MIN_TICK..MAX_TICK, offset in any::<u64>()) {
        let sqrt = sqrt_near_tick(t, offset);
        let Ok(found) = get_tick_at_sqrt_ratio(sqrt.get()) else {
            panic!("in range");
        };
        let Ok(at_found) = get_sqrt_ratio_at_tick(found) else {
            panic!("valid tick");
        };
        prop_assert!(at_found <= sqrt.get());
        if found < MAX_TICK {
            let Ok(next) = get_sqrt_ratio_at_tick(found + 1) else {
                panic!("valid tick");
            };
            prop_assert!(next > sqrt.get());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Probe bracketing
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_probe_prices_bracket_mean(
        t in tick_strategy(),
        offset in any::<u64>(),
        iv in prop::num::f64::ANY,
        n_sigma in prop::num::f64::ANY,
    ) {
        let mean = sqrt_near_tick(t, offset);
        let probes = compute_probe_prices(
            mean,
            &RiskParameters::new(iv, n_sigma),
            &ProtocolParams::default(),
        );
        prop_assert!(SqrtPriceX96::MIN <= probes.a());
        prop_assert!(probes.a() <= mean);
        prop_assert!(mean <= probes.b());
        prop_assert!(probes.b() <= SqrtPriceX96::MAX);
        prop_assert!(probes.scaler() >= 1.0262 && probes.scaler() <= 3.0787);
    }
}

// ---------------------------------------------------------------------------
// Properties 3 and 4: Liquidity valuation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_value_matches_amounts(
        a in -200_000i32..200_000,
        b in -200_000i32..200_000,
        current in -300_000i32..300_000,
        liquidity in 1u128..1_000_000_000_000_000_000_000_000,
    ) {
        let position = UniswapPosition::new(tick(a), tick(b), Liquidity::new(liquidity));
        let Ok((amount0, amount1)) = amounts_for_liquidity(&position, tick(current), decimals())
        else {
            panic!("expected Ok");
        };
        let Ok(price) = tick_to_price(tick(current), decimals(), QuoteToken::Token1) else {
            panic!("expected Ok");
        };
        let Ok(value) = value_of_liquidity_in_token1(&position, tick(current), decimals().token1())
        else {
            panic!("expected Ok");
        };
        let p = price.get();
        let expected = amount0 * p + amount1;
        // Floor rounding of a few raw units on each side, scaled by price.
        let tolerance = expected * 1e-9 + 4.0 * (1.0 + p + p.sqrt()) / 1e18;
        prop_assert!(
            (value - expected).abs() <= tolerance,
            "value={} expected={} tolerance={}", value, expected, tolerance
        );
    }

    #[test]
    fn prop_zero_liquidity_is_worthless(
        a in tick_strategy(),
        b in tick_strategy(),
        current in tick_strategy(),
    ) {
        let position = UniswapPosition::new(tick(a), tick(b), Liquidity::ZERO);
        prop_assert_eq!(
            amounts_for_liquidity(&position, tick(current), decimals()),
            Ok((0.0, 0.0))
        );
        prop_assert_eq!(
            value_of_liquidity_in_token1(&position, tick(current), decimals().token1()),
            Ok(0.0)
        );
    }
}

// ---------------------------------------------------------------------------
// Property 5: Health monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_more_collateral_never_lowers_health(
        fixed0 in amount_strategy(),
        fixed1 in amount_strategy(),
        debt0 in amount_strategy(),
        debt1 in amount_strategy(),
        extra in amount_strategy(),
        t in -100_000i32..100_000,
    ) {
        let mean = sqrt_near_tick(t, 0);
        let base = health(fixed0, fixed1, debt0, debt1, mean);
        prop_assert!(health(fixed0 + extra, fixed1, debt0, debt1, mean) >= base);
        prop_assert!(health(fixed0, fixed1 + extra, debt0, debt1, mean) >= base);
    }

    #[test]
    fn prop_more_debt_never_raises_health(
        fixed0 in amount_strategy(),
        fixed1 in amount_strategy(),
        debt0 in 1.0f64..1e9,
        debt1 in amount_strategy(),
        extra in amount_strategy(),
        t in -100_000i32..100_000,
    ) {
        // Starts indebted: from zero debt the sentinel applies instead.
        let mean = sqrt_near_tick(t, 0);
        let base = health(fixed0, fixed1, debt0, debt1, mean);
        prop_assert!(health(fixed0, fixed1, debt0 + extra, debt1, mean) <= base);
        prop_assert!(health(fixed0, fixed1, debt0, debt1 + extra, mean) <= base);
    }
}

// ---------------------------------------------------------------------------
// Property 6: Threshold bracketing
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_thresholds_bracket_mean(
        fixed0 in amount_strategy(),
        fixed1 in amount_strategy(),
        debt0 in amount_strategy(),
        debt1 in amount_strategy(),
        t in -200_000i32..200_000,
        iv in 0.0f64..3.0,
    ) {
        let Ok(assets) = Assets::new(fixed0, fixed1) else {
            panic!("valid assets");
        };
        let Ok(liabilities) = Liabilities::new(debt0, debt1) else {
            panic!("valid liabilities");
        };
        let mean = sqrt_near_tick(t, 0);
        let Ok(thresholds) = compute_liquidation_thresholds(
            &Portfolio::from_assets(assets),
            &liabilities,
            mean,
            &RiskParameters::new(iv, 4.0),
            decimals(),
            &ProtocolParams::default(),
            &ThresholdSearch::default(),
        ) else {
            panic!("expected Ok");
        };
        prop_assert!(thresholds.min_sqrt_ratio() <= thresholds.lower_sqrt_ratio());
        prop_assert!(thresholds.lower_sqrt_ratio() <= mean);
        prop_assert!(mean <= thresholds.upper_sqrt_ratio());
        prop_assert!(thresholds.upper_sqrt_ratio() <= thresholds.max_sqrt_ratio());
    }
}

// ---------------------------------------------------------------------------
// Property 7: Health is never NaN
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_health_is_never_nan(
        fixed0 in extreme_amount_strategy(),
        fixed1 in extreme_amount_strategy(),
        debt0 in extreme_amount_strategy(),
        debt1 in extreme_amount_strategy(),
        t in edge_tick_strategy(),
        decimals0 in 0u8..=18,
        decimals1 in 0u8..=18,
        iv in prop::num::f64::ANY,
    ) {
        let Ok(assets) = Assets::new(fixed0, fixed1) else {
            panic!("valid assets");
        };
        let Ok(liabilities) = Liabilities::new(debt0, debt1) else {
            panic!("valid liabilities");
        };
        let Ok(pair) = PairDecimals::try_from_raw(decimals0, decimals1) else {
            panic!("valid decimals");
        };
        let Ok(report) = is_solvent(
            &Portfolio::from_assets(assets),
            &liabilities,
            sqrt_near_tick(t, 0),
            &RiskParameters::new(iv, 4.0),
            pair,
            &ProtocolParams::default(),
        ) else {
            panic!("expected Ok");
        };
        prop_assert!(report.assets_a.is_finite() && report.assets_b.is_finite());
        prop_assert!(report.liabilities_a.is_finite() && report.liabilities_b.is_finite());
        prop_assert!(!report.health.is_nan(), "health={}", report.health);
        prop_assert!(report.health >= 0.0);
    }
}
