//! Inverse Price Solver
//!
//! Commission and withholding tax are percentages of the unknown sale
//! price, so the target-profit relationship is linear but coupled:
//! `profit = price·(1 − k) − fixed` with `k` the combined rate and `fixed`
//! the price-independent costs. Both methods reduce to one linear solve,
//! and the solved price is re-run through the forward breakdown so the
//! reported numbers never diverge from the solve.

use rust_decimal::prelude::*;

use shared::calc::RecommendedPrice;
use shared::models::{ProfitMethod, VatRates};

use crate::breakdown::{CostComponents, build_breakdown, validate_vat_rates};
use crate::error::{CalcError, CalcResult};
use crate::money::{require_rate, to_decimal, to_f64};
use crate::vat;

/// Solve the sale price for a target profit rate
///
/// Margin targets profit as a percentage of the sale price, markup as a
/// percentage of the cost price. When commission + withholding (+ the
/// margin target) consume the whole price the solve has no positive
/// solution and fails with `InfeasibleTarget`; a negative or infinite
/// price is never returned.
pub fn recommend_price(
    components: &CostComponents,
    method: ProfitMethod,
    target_rate_pct: f64,
    vat_rates: &VatRates,
    include_cost_vat: bool,
) -> CalcResult<RecommendedPrice> {
    components.validate()?;
    require_rate("target_rate", target_rate_pct)?;
    validate_vat_rates(vat_rates)?;

    let cost = to_decimal(components.cost_excl);
    let k = (to_decimal(components.commission_rate_pct)
        + to_decimal(components.withholding_rate_pct))
        / Decimal::ONE_HUNDRED;
    let service_fee_excl = vat::incl_to_excl(
        to_decimal(components.service_fee_incl),
        to_decimal(vat_rates.service_fee),
    );
    let fixed = cost
        + to_decimal(components.shipping_excl)
        + service_fee_excl
        + to_decimal(components.misc_cost_excl);
    let target = to_decimal(target_rate_pct) / Decimal::ONE_HUNDRED;

    let price = match method {
        ProfitMethod::Margin => {
            // profit = price·target  ⇒  price·(1 − k − target) = fixed
            let denominator = Decimal::ONE - k - target;
            if denominator <= Decimal::ZERO {
                return Err(CalcError::InfeasibleTarget {
                    consumed_percent: to_f64((k + target) * Decimal::ONE_HUNDRED),
                });
            }
            fixed / denominator
        }
        ProfitMethod::Markup => {
            // Desired profit is a fixed amount of the cost; converting it to
            // the margin-equivalent rate at the solved price level collapses
            // the re-derivation into the same linear solve:
            // price·(1 − k) = fixed + cost·target
            let denominator = Decimal::ONE - k;
            if denominator <= Decimal::ZERO {
                return Err(CalcError::InfeasibleTarget {
                    consumed_percent: to_f64(k * Decimal::ONE_HUNDRED),
                });
            }
            (fixed + cost * target) / denominator
        }
    };

    // Re-run the forward decomposition on the unrounded solution for an
    // auditable breakdown consistent with the solve
    let breakdown = build_breakdown(
        components,
        price,
        vat_rates,
        include_cost_vat,
        Some((method, target_rate_pct)),
    );

    Ok(RecommendedPrice {
        price_excl_vat: to_f64(price),
        price_incl_vat: to_f64(vat::excl_to_incl(price, to_decimal(vat_rates.sale))),
        method,
        target_rate: target_rate_pct,
        breakdown,
    })
}
