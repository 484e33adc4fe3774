//! Barem Tier Matcher
//!
//! A barem is a carrier's tiered shipping price table. Rules are a flat,
//! unordered set resolved by predicate: carrier equality, an inclusive
//! order-value range and an optional desi ceiling. Overlapping ranges are
//! tolerated and resolved by a deterministic tie-break.

use std::cmp::Ordering;

use shared::models::BaremRule;

/// Find the barem tier matching an order
///
/// Tie-break when several tiers match: the tightest desi ceiling that still
/// covers the parcel wins (a finite ceiling beats unlimited); among equal
/// ceilings the cheapest tier wins. Returns `None` when nothing matches —
/// the caller decides the fallback, this function never substitutes one.
pub fn find_barem_tier<'a>(
    carrier: &str,
    order_value_excl: f64,
    desi: f64,
    rules: &'a [BaremRule],
) -> Option<&'a BaremRule> {
    rules
        .iter()
        .filter(|rule| {
            rule.carrier == carrier
                && order_value_excl >= rule.min_order_value
                && order_value_excl <= rule.max_order_value
                && rule.max_desi.is_none_or(|ceiling| ceiling >= desi)
        })
        .min_by(|a, b| {
            cmp_f64(desi_ceiling(a), desi_ceiling(b)).then_with(|| cmp_f64(a.price, b.price))
        })
}

/// Ceiling used for tie-break ordering: unlimited sorts last
fn desi_ceiling(rule: &BaremRule) -> f64 {
    rule.max_desi.unwrap_or(f64::INFINITY)
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
