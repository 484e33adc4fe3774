//! Configuration models
//!
//! Rows the settings screens edit and the sync layer persists. The engine
//! never loads these itself; callers pass them in per invocation.

pub mod barem;
pub mod cost_override;
pub mod cost_settings;

// Re-exports
pub use barem::{BaremRule, BaremRuleCreate};
pub use cost_override::{CategoryCostOverride, ProductCostOverride};
pub use cost_settings::{GeneralCostSettings, GeneralCostSettingsUpdate, ProfitMethod, VatRates};
