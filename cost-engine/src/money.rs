//! Money conversion helpers using rust_decimal for precision
//!
//! f64 values cross the API boundary; all internal arithmetic is `Decimal`.
//! Conversion back to f64 rounds to 2 decimal places and happens only when
//! a result struct is built, never between calculation steps.

use rust_decimal::prelude::*;

use crate::error::{CalcError, CalcResult};

/// Rounding for monetary values (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Convert f64 to Decimal for calculation
///
/// Inputs are checked with [`require_finite_amount`]/[`require_rate`] at the
/// boundary. If a non-finite value somehow reaches here, logs an error and
/// returns ZERO to avoid silent corruption of financial results.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for a result struct, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    let diff = (to_decimal(a) - to_decimal(b)).abs();
    diff < MONEY_TOLERANCE
}

/// Validate that a monetary input is finite and non-negative
#[inline]
pub fn require_finite_amount(field: &'static str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::InvalidAmount { field, value });
    }
    Ok(())
}

/// Validate that a percentage input is finite and non-negative
#[inline]
pub fn require_rate(field: &'static str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::InvalidRate { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_precision() {
        // Classic floating point problem: 0.1 + 0.2 != 0.3
        let a = 0.1_f64;
        let b = 0.2_f64;
        assert_ne!(a + b, 0.3);

        let sum_dec = to_decimal(a) + to_decimal(b);
        assert_eq!(to_f64(sum_dec), 0.3);
    }

    #[test]
    fn test_accumulation_precision() {
        // Sum 0.01 one thousand times
        let mut total = Decimal::ZERO;
        for _ in 0..1000 {
            total += to_decimal(0.01);
        }
        assert_eq!(to_f64(total), 10.0);
    }

    #[test]
    fn test_to_f64_half_up_rounding() {
        assert_eq!(to_f64(to_decimal(10.005)), 10.01);
        assert_eq!(to_f64(to_decimal(7.075)), 7.08);
        assert_eq!(to_f64(to_decimal(-10.005)), -10.01);
    }

    #[test]
    fn test_money_eq_tolerance() {
        assert!(money_eq(10.0, 10.0));
        assert!(money_eq(10.001, 10.0));
        assert!(!money_eq(10.01, 10.0));
    }

    #[test]
    fn test_require_finite_amount_rejects_negative_and_nan() {
        assert!(require_finite_amount("price", 12.5).is_ok());
        assert!(require_finite_amount("price", 0.0).is_ok());

        let err = require_finite_amount("price", -1.0).unwrap_err();
        assert!(matches!(err, CalcError::InvalidAmount { field: "price", .. }));
        assert!(require_finite_amount("price", f64::NAN).is_err());
        assert!(require_finite_amount("price", f64::INFINITY).is_err());
    }

    #[test]
    fn test_require_rate_rejects_negative() {
        assert!(require_rate("commission_rate", 21.5).is_ok());

        let err = require_rate("commission_rate", -3.0).unwrap_err();
        assert!(matches!(
            err,
            CalcError::InvalidRate {
                field: "commission_rate",
                ..
            }
        ));
    }
}
