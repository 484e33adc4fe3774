//! Engine error types
//!
//! Calculation errors are value-level and never process-fatal. The engine
//! raises immediately instead of substituting silent defaults: a missing
//! cost treated as zero would produce a misleading profit figure.

use shared::error::{CalcErrorCode, CalcFailure};
use thiserror::Error;

/// Calculation error
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CalcError {
    /// Product cost price is not configured
    #[error("cost price is not set for product {0}")]
    MissingCostPrice(String),
    /// Commission + withholding + target rate consume the whole sale price
    #[error("target is infeasible: rates consume {consumed_percent}% of the sale price")]
    InfeasibleTarget { consumed_percent: f64 },
    /// Negative or non-finite percentage input
    #[error("invalid rate for {field}: {value}")]
    InvalidRate { field: &'static str, value: f64 },
    /// Negative or non-finite monetary input
    #[error("invalid amount for {field}: {value}")]
    InvalidAmount { field: &'static str, value: f64 },
}

impl CalcError {
    pub fn code(&self) -> CalcErrorCode {
        match self {
            Self::MissingCostPrice(_) => CalcErrorCode::MissingCostPrice,
            Self::InfeasibleTarget { .. } => CalcErrorCode::InfeasibleTarget,
            Self::InvalidRate { .. } => CalcErrorCode::InvalidRate,
            Self::InvalidAmount { .. } => CalcErrorCode::InvalidAmount,
        }
    }
}

impl From<CalcError> for CalcFailure {
    fn from(err: CalcError) -> Self {
        CalcFailure::new(err.code(), err.to_string())
    }
}

pub type CalcResult<T> = Result<T, CalcError>;
