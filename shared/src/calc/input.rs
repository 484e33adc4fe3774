//! Calculation inputs assembled by the caller

use serde::{Deserialize, Serialize};

use crate::models::cost_override::{CategoryCostOverride, ProductCostOverride};
use crate::models::cost_settings::{GeneralCostSettings, ProfitMethod};

/// Per-listing cost facts for one calculation
///
/// The caller (persistence + marketplace sync) gathers everything the
/// engine needs: the listing's own numbers plus whatever overrides exist
/// for its product and category. Fields left `None` fall back to the
/// general settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ListingCosts {
    pub product_id: String,
    /// Product cost price (tax-exclusive); `None` means not configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<f64>,
    /// Carrier for the barem lookup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    /// Parcel weight-equivalent (desi)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desi: Option<f64>,
    /// Platform service fee as invoiced (tax-INCLUSIVE)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_fee: Option<f64>,
    /// One-off cost added on top of the resolved miscellaneous cost
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_misc_cost: Option<f64>,
    /// Product-level override, if one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_override: Option<ProductCostOverride>,
    /// Category-level override, if one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_override: Option<CategoryCostOverride>,
}

/// Target profit for the inverse price solve
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceTarget {
    pub method: ProfitMethod,
    /// Target profit rate (percent); margin of the sale price or markup of
    /// the cost price depending on `method`
    pub rate_percent: f64,
}

impl PriceTarget {
    pub fn new(method: ProfitMethod, rate_percent: f64) -> Self {
        Self {
            method,
            rate_percent,
        }
    }

    /// Build from the configured defaults
    ///
    /// `None` when no default target rate is set.
    pub fn from_settings(settings: &GeneralCostSettings) -> Option<Self> {
        settings.default_target_rate.map(|rate_percent| Self {
            method: settings.default_method,
            rate_percent,
        })
    }
}
