//! Calculation input and output types
//!
//! Ephemeral values: callers assemble an input per invocation and the
//! engine returns a result synchronously. Nothing here is persisted.

pub mod breakdown;
pub mod input;

// Re-exports
pub use breakdown::{Breakdown, BulkRecommendation, RecommendedPrice};
pub use input::{ListingCosts, PriceTarget};
