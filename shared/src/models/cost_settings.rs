//! General Cost Settings Model

use serde::{Deserialize, Serialize};

/// Profit calculation method enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfitMethod {
    /// Profit as a percentage of the sale price (tax-exclusive)
    #[default]
    Margin,
    /// Profit as a percentage of the cost price
    Markup,
}

/// VAT rates per cost component (percentages)
///
/// Each component is rated independently; a component with no VAT uses 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct VatRates {
    /// VAT rate on the sale price
    pub sale: f64,
    /// VAT rate on the shipping cost
    pub shipping: f64,
    /// VAT rate on the marketplace commission
    pub commission: f64,
    /// VAT rate on the platform service fee
    pub service_fee: f64,
    /// VAT rate on the cost of goods
    pub product_cost: f64,
}

/// General cost settings entity (process-wide defaults, one active row)
///
/// Numeric defaults are optional: `None` means "not configured" and defers
/// to the next fallback level in the override resolution chain. The engine
/// receives this record as an explicit parameter on every call; it is never
/// read from a global.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralCostSettings {
    /// Fallback shipping cost (tax-exclusive) when no barem tier matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_shipping_cost: Option<f64>,
    /// Fallback commission rate (percent of the sale price)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_commission_rate: Option<f64>,
    /// Withholding tax rate (percent of the sale price)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_withholding_rate: Option<f64>,
    /// Fallback miscellaneous cost (tax-exclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_misc_cost: Option<f64>,
    /// Fallback platform service fee (tax-EXCLUSIVE; listings carry the
    /// tax-inclusive invoiced amount instead)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_service_fee: Option<f64>,
    /// Fallback carrier for barem lookups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_carrier: Option<String>,
    /// Fallback parcel weight-equivalent (desi) for barem lookups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_desi: Option<f64>,
    /// Default profit calculation method for price recommendations
    #[serde(default)]
    pub default_method: ProfitMethod,
    /// Default target profit rate (percent) for price recommendations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_target_rate: Option<f64>,
    /// VAT rates per component
    #[serde(default)]
    pub vat_rates: VatRates,
    /// Whether cost-of-goods VAT counts as deductible input VAT
    #[serde(default)]
    pub include_cost_vat: bool,
    /// Last update (Unix millis), audit only
    #[serde(default)]
    pub updated_at: i64,
}

/// Update general cost settings payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeneralCostSettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_shipping_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_commission_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_withholding_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_misc_cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_service_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_carrier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_desi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_method: Option<ProfitMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_target_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_rates: Option<VatRates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_cost_vat: Option<bool>,
}
