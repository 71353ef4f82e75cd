//! Largest borrow and withdrawal amounts that keep an account solvent.
//!
//! All three calculators work from a [`SolvencyBasics`] record and return
//! `(token0, token1)` amounts in human units, never negative.  Each token
//! is sized independently at both probe prices and the tighter of the two
//! wins.
//!
//! Withdrawals and borrow-and-withdraw share one model.  Removing `w` of a
//! token (or borrowing it and taking it out) costs `coeff * w` of value at
//! the probe price, where `coeff` is `1` for a plain withdrawal and the
//! leverage factor for a borrow.  Once `w` exceeds that token's surplus at
//! the mean price, the excess also becomes shortfall and costs an extra
//! `1 / liquidation_incentive` per unit.
//!
//! Every result is reduced by [`LIMIT_SAFETY_MARGIN`] so that applying it
//! in full leaves the account solvent after floating-point rounding.

use crate::config::ProtocolParams;
use crate::solvency::SolvencyBasics;

/// Relative reduction applied to every computed limit.
pub const LIMIT_SAFETY_MARGIN: f64 = 1e-9;

/// Largest new borrow of either token alone.
///
/// `surplus * max_leverage` of new debt fits at each probe; token0 amounts
/// are converted at the probe price.
#[must_use]
pub fn max_borrows(basics: &SolvencyBasics, params: &ProtocolParams) -> (f64, f64) {
    let new_a = basics.surplus_a * params.max_leverage();
    let new_b = basics.surplus_b * params.max_leverage();
    let borrow1 = new_a.min(new_b);
    let borrow0 = (new_a / basics.price_a).min(new_b / basics.price_b);
    (settle(borrow0), settle(borrow1))
}

/// Largest withdrawal of either token's fixed balance alone.
///
/// Capped at the fixed balance: liquidity-derived collateral cannot be
/// withdrawn directly.
#[must_use]
pub fn max_withdraws(basics: &SolvencyBasics, params: &ProtocolParams) -> (f64, f64) {
    let (w0, w1) = withdrawable(basics, params, 1.0);
    (w0.min(basics.fixed0), w1.min(basics.fixed1))
}

/// Largest amount of either token that can be borrowed and withdrawn in
/// one step.
#[must_use]
pub fn max_borrow_and_withdraw(basics: &SolvencyBasics, params: &ProtocolParams) -> (f64, f64) {
    withdrawable(basics, params, params.leverage_factor())
}

fn withdrawable(basics: &SolvencyBasics, params: &ProtocolParams, coeff: f64) -> (f64, f64) {
    let incentive = params.liquidation_incentive();
    let at = |surplus: f64, pad: f64, unit_price: f64| {
        limit_at_probe(surplus, pad, unit_price, coeff, incentive)
    };
    let w0 = at(basics.surplus_a, basics.surplus0_c, basics.price_a)
        .min(at(basics.surplus_b, basics.surplus0_c, basics.price_b));
    let w1 = at(basics.surplus_a, basics.surplus1_c, 1.0)
        .min(at(basics.surplus_b, basics.surplus1_c, 1.0));
    (settle(w0), settle(w1))
}

/// Amount whose removal consumes exactly `surplus` at one probe price.
///
/// The first `pad` units cost `coeff * unit_price` each; every unit past
/// the pad adds `unit_price / incentive` of shortfall on top.
fn limit_at_probe(surplus: f64, pad: f64, unit_price: f64, coeff: f64, incentive: f64) -> f64 {
    if surplus <= 0.0 || unit_price <= 0.0 {
        return 0.0;
    }
    let unit_cost = coeff * unit_price;
    let pad_cost = unit_cost * pad;
    if surplus <= pad_cost {
        surplus / unit_cost
    } else {
        pad + (surplus - pad_cost) / ((coeff + 1.0 / incentive) * unit_price)
    }
}

/// Clamps at zero and applies the safety margin.
fn settle(value: f64) -> f64 {
    if value > 0.0 {
        value * (1.0 - LIMIT_SAFETY_MARGIN)
    } else {
        0.0
    }
}
