//! Calculation results
//!
//! One breakdown shape covers both directions: a forward decomposition of a
//! known sale price, and the breakdown re-derived from a solved price (in
//! which case `target_method`/`target_rate` record what was solved for).
//! All monetary fields are tax-exclusive with the component's own VAT
//! amount alongside, rounded to 2 decimal places at construction.

use serde::{Deserialize, Serialize};

use crate::error::CalcFailure;
use crate::models::cost_settings::ProfitMethod;

/// Full cost/profit decomposition of one sale price
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Breakdown {
    /// Sale price (tax-exclusive)
    pub sale_price: f64,
    pub sale_vat: f64,

    /// Product cost (tax-exclusive)
    pub product_cost: f64,
    pub product_cost_vat: f64,

    /// Effective shipping cost (tax-exclusive)
    pub shipping_cost: f64,
    pub shipping_vat: f64,
    /// Whether the shipping cost came from a matched barem tier
    pub barem_matched: bool,

    /// Commission rate actually applied (percent of the sale price)
    pub commission_rate: f64,
    pub commission_amount: f64,
    pub commission_vat: f64,

    /// Withholding tax rate actually applied (percent of the sale price)
    pub withholding_rate: f64,
    pub withholding_amount: f64,

    /// Platform service fee (tax-exclusive)
    pub service_fee: f64,
    pub service_fee_vat: f64,

    /// Miscellaneous cost (tax-exclusive, no VAT component)
    pub misc_cost: f64,

    /// Input VAT deductible against the sales VAT
    pub deductible_vat: f64,
    /// Sales VAT minus deductible input VAT; negative means a refundable
    /// position and is reported as-is, never clamped
    pub net_vat_payable: f64,

    /// Total expense, VAT-inclusive: every line converted per its own rate
    /// plus the net VAT payable (floored at zero) added exactly once
    pub total_expense: f64,

    /// Sale price minus all tax-exclusive expense lines
    pub net_profit: f64,
    /// Profit as a percentage of the sale price; `None` when the sale
    /// price is zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_percent: Option<f64>,
    /// Profit as a percentage of the cost price; `None` when the cost is
    /// zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markup_percent: Option<f64>,

    /// Method the inverse solver used; `None` for forward calculations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_method: Option<ProfitMethod>,
    /// Target rate the inverse solver used; `None` for forward calculations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_rate: Option<f64>,
}

/// Solved price for a target profit rate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendedPrice {
    /// Recommended sale price (tax-exclusive)
    pub price_excl_vat: f64,
    /// Recommended sale price including sale VAT
    pub price_incl_vat: f64,
    pub method: ProfitMethod,
    pub target_rate: f64,
    /// Forward breakdown re-run at the solved price
    pub breakdown: Breakdown,
}

/// Per-listing outcome of a bulk recommendation run
///
/// Exactly one of `recommended`/`error` is set; a failed listing never
/// aborts the batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BulkRecommendation {
    pub product_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended: Option<RecommendedPrice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CalcFailure>,
}

impl BulkRecommendation {
    pub fn success(product_id: String, recommended: RecommendedPrice) -> Self {
        Self {
            product_id,
            recommended: Some(recommended),
            error: None,
        }
    }

    pub fn failure(product_id: String, error: CalcFailure) -> Self {
        Self {
            product_id,
            recommended: None,
            error: Some(error),
        }
    }
}
