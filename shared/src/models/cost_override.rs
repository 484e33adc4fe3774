//! Cost Override Models
//!
//! Optional per-product and per-category overrides for the resolution chain
//! (product → category → general defaults). Every field is optional; `None`
//! defers to the next level and is distinct from an explicit zero.

use serde::{Deserialize, Serialize};

/// Product-level cost override (at most one per product)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductCostOverride {
    pub product_id: String,
    /// Commission rate override (percent of the sale price)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission_rate: Option<f64>,
    /// Shipping cost override (tax-exclusive); bypasses the barem lookup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_cost: Option<f64>,
    /// Miscellaneous cost override (tax-exclusive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub misc_cost: Option<f64>,
}

/// Category-level cost override (at most one per category)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CategoryCostOverride {
    pub category_id: String,
    /// Commission rate override (percent of the sale price)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission_rate: Option<f64>,
}
