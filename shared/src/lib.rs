//! Shared types for the seller cost dashboard
//!
//! Plain data types exchanged between the persistence/UI layers and the
//! calculation engine: general cost settings, barem (tiered shipping) rules,
//! per-product and per-category cost overrides, calculation inputs/outputs,
//! and serializable calculation error codes.
//!
//! Nothing in this crate performs I/O; settings and rules are loaded by the
//! surrounding application and handed to the engine as values.

pub mod calc;
pub mod error;
pub mod models;

// Re-exports
pub use calc::{Breakdown, BulkRecommendation, ListingCosts, PriceTarget, RecommendedPrice};
pub use error::{CalcErrorCode, CalcFailure};
pub use models::{
    BaremRule, CategoryCostOverride, GeneralCostSettings, ProductCostOverride, ProfitMethod,
    VatRates,
};
