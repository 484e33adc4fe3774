//! Override Resolution Chain
//!
//! Effective cost parameters resolve product-level override →
//! category-level override → general default, first non-null wins. `None`
//! means "unresolved" and is distinct from an override that explicitly
//! resolves to zero; the chain never substitutes a hidden default — the
//! caller applies its own fallback and can tell the two cases apart.

use shared::models::{CategoryCostOverride, ProductCostOverride};

/// Where an effective shipping cost came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShippingSource {
    /// Product-level override, bypasses the barem lookup
    ProductOverride,
    /// Matched barem tier
    BaremTier,
    /// General default (no override, no matching tier)
    GeneralDefault,
}

/// Resolve the effective commission rate (percent)
pub fn resolve_commission_rate(
    product: Option<&ProductCostOverride>,
    category: Option<&CategoryCostOverride>,
    general: Option<f64>,
) -> Option<f64> {
    product
        .and_then(|o| o.commission_rate)
        .or_else(|| category.and_then(|o| o.commission_rate))
        .or(general)
}

/// Product-level shipping cost override
///
/// Categories carry no shipping field; below the product level the barem
/// lookup and the general default compete in the engine facade instead.
pub fn resolve_shipping_override(product: Option<&ProductCostOverride>) -> Option<f64> {
    product.and_then(|o| o.shipping_cost)
}

/// Resolve the effective miscellaneous cost (tax-exclusive)
pub fn resolve_misc_cost(
    product: Option<&ProductCostOverride>,
    general: Option<f64>,
) -> Option<f64> {
    product.and_then(|o| o.misc_cost).or(general)
}
