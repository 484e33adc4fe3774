//! Cost & Profitability Calculation Engine
//!
//! Pure, synchronous calculation core of the seller dashboard. Given a
//! listing's cost facts, the general settings and the barem rule set, the
//! engine resolves every applicable cost component through the override
//! chain, then either decomposes a known sale price into a full cost/profit
//! breakdown or inverts the relationship to solve the price for a target
//! margin or markup.
//!
//! The engine performs no I/O and holds no state between calls; settings,
//! rules and overrides arrive as plain `shared` values from the caller, and
//! every function is safe to invoke concurrently.
//!
//! # Data flow
//!
//! ```text
//! ListingCosts + GeneralCostSettings + [BaremRule]
//!         ↓
//! resolve (override chain) ──→ barem (tier lookup)
//!         ↓
//! breakdown (forward) / solver (inverse)
//!         ↓
//! Breakdown / RecommendedPrice / Vec<BulkRecommendation>
//! ```

pub mod barem;
pub mod breakdown;
pub mod engine;
pub mod error;
pub mod money;
pub mod resolve;
pub mod solver;
pub mod vat;

// Re-exports
pub use barem::find_barem_tier;
pub use breakdown::{CostComponents, calculate_breakdown};
pub use engine::CostEngine;
pub use error::{CalcError, CalcResult};
pub use resolve::{
    ShippingSource, resolve_commission_rate, resolve_misc_cost, resolve_shipping_override,
};
pub use solver::recommend_price;
