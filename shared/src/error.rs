//! Serializable calculation error codes
//!
//! The engine's internal error type lives in `cost-engine`; this is the
//! wire form carried by bulk results and shown by the dashboard.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Calculation error codes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CalcErrorCode {
    /// Product cost price is not configured; no margin can be computed
    MissingCostPrice,
    /// Commission + withholding + target rate consume the whole sale price
    InfeasibleTarget,
    /// Negative or non-finite percentage input
    InvalidRate,
    /// Negative or non-finite monetary input
    InvalidAmount,
}

/// Calculation failure record (per item in bulk results)
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[error("{message}")]
pub struct CalcFailure {
    pub code: CalcErrorCode,
    pub message: String,
}

impl CalcFailure {
    pub fn new(code: CalcErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
