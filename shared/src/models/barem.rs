//! Barem Rule Model
//!
//! A barem is a carrier's tiered shipping price table: each rule covers an
//! order-value range and an optional parcel weight-equivalent (desi)
//! ceiling. Rules form a flat, unordered set resolved by a match predicate
//! in the engine; overlap between ranges is not enforced here.

use serde::{Deserialize, Serialize};

/// Barem rule entity (one shipping price tier)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BaremRule {
    pub id: i64,
    /// Carrier name as configured in the panel
    pub carrier: String,
    /// Inclusive lower bound of the order value range (tax-exclusive)
    pub min_order_value: f64,
    /// Inclusive upper bound of the order value range (tax-exclusive)
    pub max_order_value: f64,
    /// Desi ceiling for this tier; `None` means unlimited
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_desi: Option<f64>,
    /// Shipping price for this tier (tax-exclusive)
    pub price: f64,
}

/// Create barem rule payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaremRuleCreate {
    pub carrier: String,
    pub min_order_value: f64,
    pub max_order_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_desi: Option<f64>,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_barem_rule_serialization_round_trip() {
        let rule = BaremRule {
            id: 7,
            carrier: "Yurtiçi Kargo".to_string(),
            min_order_value: 0.0,
            max_order_value: 149.99,
            max_desi: Some(5.0),
            price: 27.08,
        };

        let json = serde_json::to_string(&rule).unwrap();
        let deserialized: BaremRule = serde_json::from_str(&json).unwrap();
        assert_eq!(rule, deserialized);
    }

    #[test]
    fn test_barem_rule_create_deserialization() {
        let json = r#"{
            "carrier": "Aras",
            "min_order_value": 0.0,
            "max_order_value": 99.99,
            "price": 22.5
        }"#;

        let payload: BaremRuleCreate = serde_json::from_str(json).unwrap();
        assert_eq!(payload.carrier, "Aras");
        assert_eq!(payload.max_desi, None);
        assert_eq!(payload.price, 22.5);
    }

    #[test]
    fn test_barem_rule_unlimited_desi_omitted() {
        let rule = BaremRule {
            id: 1,
            carrier: "MNG".to_string(),
            min_order_value: 150.0,
            max_order_value: 10_000.0,
            max_desi: None,
            price: 45.5,
        };

        let json = serde_json::to_string(&rule).unwrap();
        assert!(!json.contains("max_desi"));

        let deserialized: BaremRule = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.max_desi, None);
    }
}
