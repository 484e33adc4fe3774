//! Forward Breakdown Calculator
//!
//! Decomposes a known sale price into the full cost/profit picture: every
//! expense line with its own VAT, the net VAT settlement, the VAT-inclusive
//! total expense, net profit and the margin/markup percentages.
//!
//! All arithmetic is `Decimal`; nothing is rounded between steps. Rounding
//! to 2 decimal places happens once, when the `Breakdown` struct is built.

use rust_decimal::prelude::*;

use shared::calc::Breakdown;
use shared::models::{ProfitMethod, VatRates};

use crate::error::CalcResult;
use crate::money::{require_finite_amount, require_rate, to_decimal, to_f64};
use crate::vat;

/// Fully-resolved cost components for one calculation
///
/// Produced by the engine facade after the override chain and the barem
/// lookup; every field is a settled number, no further fallback applies.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CostComponents {
    /// Product cost price (tax-exclusive)
    pub cost_excl: f64,
    /// Effective shipping cost (tax-exclusive)
    pub shipping_excl: f64,
    /// Commission rate (percent of the sale price)
    pub commission_rate_pct: f64,
    /// Withholding tax rate (percent of the sale price)
    pub withholding_rate_pct: f64,
    /// Platform service fee (tax-inclusive, as invoiced)
    pub service_fee_incl: f64,
    /// Miscellaneous cost (tax-exclusive)
    pub misc_cost_excl: f64,
    /// Whether the shipping cost came from a matched barem tier
    pub barem_matched: bool,
}

impl CostComponents {
    pub(crate) fn validate(&self) -> CalcResult<()> {
        require_finite_amount("cost_price", self.cost_excl)?;
        require_finite_amount("shipping_cost", self.shipping_excl)?;
        require_rate("commission_rate", self.commission_rate_pct)?;
        require_rate("withholding_rate", self.withholding_rate_pct)?;
        require_finite_amount("service_fee", self.service_fee_incl)?;
        require_finite_amount("misc_cost", self.misc_cost_excl)?;
        Ok(())
    }
}

pub(crate) fn validate_vat_rates(rates: &VatRates) -> CalcResult<()> {
    require_rate("sale_vat_rate", rates.sale)?;
    require_rate("shipping_vat_rate", rates.shipping)?;
    require_rate("commission_vat_rate", rates.commission)?;
    require_rate("service_fee_vat_rate", rates.service_fee)?;
    require_rate("product_cost_vat_rate", rates.product_cost)?;
    Ok(())
}

/// Decompose a sale price into the full cost/profit breakdown
///
/// `sale_price_excl` is tax-exclusive. Fails fast on negative or non-finite
/// inputs; a zero cost or a zero sale price is legal and reported with the
/// corresponding percentage as `None` instead of dividing by zero.
pub fn calculate_breakdown(
    components: &CostComponents,
    sale_price_excl: f64,
    vat_rates: &VatRates,
    include_cost_vat: bool,
) -> CalcResult<Breakdown> {
    components.validate()?;
    require_finite_amount("sale_price", sale_price_excl)?;
    validate_vat_rates(vat_rates)?;

    Ok(build_breakdown(
        components,
        to_decimal(sale_price_excl),
        vat_rates,
        include_cost_vat,
        None,
    ))
}

/// Core decomposition over a `Decimal` sale price
///
/// The inverse solver calls this with its unrounded solution so the
/// reported breakdown never diverges from the solve; `target` stamps the
/// method/rate discriminant in that case.
pub(crate) fn build_breakdown(
    components: &CostComponents,
    sale: Decimal,
    vat_rates: &VatRates,
    include_cost_vat: bool,
    target: Option<(ProfitMethod, f64)>,
) -> Breakdown {
    let cost = to_decimal(components.cost_excl);
    let shipping = to_decimal(components.shipping_excl);
    let misc = to_decimal(components.misc_cost_excl);

    let commission = sale * to_decimal(components.commission_rate_pct) / Decimal::ONE_HUNDRED;
    let withholding = sale * to_decimal(components.withholding_rate_pct) / Decimal::ONE_HUNDRED;

    let service_fee_incl = to_decimal(components.service_fee_incl);
    let service_fee = vat::incl_to_excl(service_fee_incl, to_decimal(vat_rates.service_fee));

    let sale_vat = vat::vat_of_excl(sale, to_decimal(vat_rates.sale));
    let cost_vat = vat::vat_of_excl(cost, to_decimal(vat_rates.product_cost));
    let shipping_vat = vat::vat_of_excl(shipping, to_decimal(vat_rates.shipping));
    let commission_vat = vat::vat_of_excl(commission, to_decimal(vat_rates.commission));
    let service_fee_vat = service_fee_incl - service_fee;

    let net_vat = vat::net_vat_payable(
        sale_vat,
        shipping_vat,
        commission_vat,
        service_fee_vat,
        cost_vat,
        include_cost_vat,
    );
    let deductible = sale_vat - net_vat;

    // Every expense line inclusive of its own VAT; withholding and misc
    // carry none. The net VAT settlement enters exactly once, and a
    // refundable position does not reduce the total.
    let total_expense = (cost + cost_vat)
        + (shipping + shipping_vat)
        + (commission + commission_vat)
        + withholding
        + service_fee_incl
        + misc
        + net_vat.max(Decimal::ZERO);

    let expenses_excl = cost + shipping + commission + withholding + service_fee + misc;
    let profit = sale - expenses_excl;

    let margin_percent =
        (!sale.is_zero()).then(|| to_f64(profit / sale * Decimal::ONE_HUNDRED));
    let markup_percent =
        (!cost.is_zero()).then(|| to_f64(profit / cost * Decimal::ONE_HUNDRED));

    Breakdown {
        sale_price: to_f64(sale),
        sale_vat: to_f64(sale_vat),
        product_cost: to_f64(cost),
        product_cost_vat: to_f64(cost_vat),
        shipping_cost: to_f64(shipping),
        shipping_vat: to_f64(shipping_vat),
        barem_matched: components.barem_matched,
        commission_rate: components.commission_rate_pct,
        commission_amount: to_f64(commission),
        commission_vat: to_f64(commission_vat),
        withholding_rate: components.withholding_rate_pct,
        withholding_amount: to_f64(withholding),
        service_fee: to_f64(service_fee),
        service_fee_vat: to_f64(service_fee_vat),
        misc_cost: to_f64(misc),
        deductible_vat: to_f64(deductible),
        net_vat_payable: to_f64(net_vat),
        total_expense: to_f64(total_expense),
        net_profit: to_f64(profit),
        margin_percent,
        markup_percent,
        target_method: target.map(|(method, _)| method),
        target_rate: target.map(|(_, rate)| rate),
    }
}
