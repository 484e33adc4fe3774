//! Cost Engine Facade
//!
//! Wires the override chain, the barem lookup and the calculators together
//! for one listing. The engine holds only borrowed caller data — settings
//! and barem rules come in as plain values, never fetched — so an instance
//! is cheap to build per call-site and safe to share across threads.

use shared::calc::{Breakdown, BulkRecommendation, ListingCosts, PriceTarget, RecommendedPrice};
use shared::models::{BaremRule, GeneralCostSettings, ProductCostOverride};

use crate::barem::find_barem_tier;
use crate::breakdown::{CostComponents, calculate_breakdown};
use crate::error::{CalcError, CalcResult};
use crate::money::{to_decimal, to_f64};
use crate::resolve::{
    ShippingSource, resolve_commission_rate, resolve_misc_cost, resolve_shipping_override,
};
use crate::{solver, vat};

/// Barem re-resolution cap for the inverse solve: the matched tier depends
/// on the order value, which is exactly the quantity being solved for
const MAX_TIER_ITERATIONS: usize = 4;

/// Calculation facade over caller-supplied settings and barem rules
pub struct CostEngine<'a> {
    settings: &'a GeneralCostSettings,
    barem_rules: &'a [BaremRule],
}

impl<'a> CostEngine<'a> {
    pub fn new(settings: &'a GeneralCostSettings, barem_rules: &'a [BaremRule]) -> Self {
        Self {
            settings,
            barem_rules,
        }
    }

    /// Forward breakdown of a known sale price (tax-exclusive)
    pub fn breakdown(&self, listing: &ListingCosts, sale_price_excl: f64) -> CalcResult<Breakdown> {
        let components = self.components_at(listing, sale_price_excl)?;
        calculate_breakdown(
            &components,
            sale_price_excl,
            &self.settings.vat_rates,
            self.settings.include_cost_vat,
        )
    }

    /// Solve the sale price that achieves a target profit rate
    ///
    /// Barem tiers are keyed by order value, so the tier is re-resolved at
    /// each solved price and the solve repeated until the resolution is
    /// stable (bounded; the last consistent solution wins if two tiers
    /// keep trading places).
    pub fn recommend_price(
        &self,
        listing: &ListingCosts,
        target: PriceTarget,
    ) -> CalcResult<RecommendedPrice> {
        let mut components = self.components_at(listing, 0.0)?;
        let mut solved = self.solve(&components, target)?;

        for _ in 1..MAX_TIER_ITERATIONS {
            let next = self.components_at(listing, solved.price_excl_vat)?;
            if next == components {
                break;
            }
            tracing::debug!(
                product_id = %listing.product_id,
                price = solved.price_excl_vat,
                "barem tier changed at the solved price, re-solving"
            );
            components = next;
            solved = self.solve(&components, target)?;
        }

        Ok(solved)
    }

    /// Apply the price solve across a collection of listings
    ///
    /// Listings are solved independently: a failure is captured per item
    /// and never aborts the batch. Results keep the input order; there are
    /// no retries.
    pub fn recommend_bulk(
        &self,
        listings: &[ListingCosts],
        target: PriceTarget,
    ) -> Vec<BulkRecommendation> {
        listings
            .iter()
            .map(|listing| match self.recommend_price(listing, target) {
                Ok(recommended) => {
                    BulkRecommendation::success(listing.product_id.clone(), recommended)
                }
                Err(err) => {
                    tracing::debug!(
                        product_id = %listing.product_id,
                        error = %err,
                        "price recommendation failed"
                    );
                    BulkRecommendation::failure(listing.product_id.clone(), err.into())
                }
            })
            .collect()
    }

    fn solve(
        &self,
        components: &CostComponents,
        target: PriceTarget,
    ) -> CalcResult<RecommendedPrice> {
        solver::recommend_price(
            components,
            target.method,
            target.rate_percent,
            &self.settings.vat_rates,
            self.settings.include_cost_vat,
        )
    }

    /// Resolve the effective cost components at a given order value
    fn components_at(
        &self,
        listing: &ListingCosts,
        order_value_excl: f64,
    ) -> CalcResult<CostComponents> {
        let cost_excl = listing
            .cost_price
            .ok_or_else(|| CalcError::MissingCostPrice(listing.product_id.clone()))?;

        let product = listing.product_override.as_ref();
        let category = listing.category_override.as_ref();
        let settings = self.settings;

        let commission_rate_pct =
            resolve_commission_rate(product, category, settings.default_commission_rate)
                .unwrap_or_else(|| {
                    tracing::warn!(
                        product_id = %listing.product_id,
                        "commission rate unresolved at every level, using 0"
                    );
                    0.0
                });

        let (shipping_excl, source) = self.resolve_shipping(listing, product, order_value_excl);

        let misc_cost_excl = resolve_misc_cost(product, settings.default_misc_cost).unwrap_or(0.0)
            + listing.extra_misc_cost.unwrap_or(0.0);

        // Listings carry the invoiced (tax-inclusive) fee; the general
        // default is stored tax-exclusive and converts per the fee's rate
        let service_fee_incl = match listing.service_fee {
            Some(fee) => fee,
            None => settings
                .default_service_fee
                .map(|excl| {
                    to_f64(vat::excl_to_incl(
                        to_decimal(excl),
                        to_decimal(settings.vat_rates.service_fee),
                    ))
                })
                .unwrap_or(0.0),
        };

        Ok(CostComponents {
            cost_excl,
            shipping_excl,
            commission_rate_pct,
            withholding_rate_pct: settings.default_withholding_rate.unwrap_or(0.0),
            service_fee_incl,
            misc_cost_excl,
            barem_matched: source == ShippingSource::BaremTier,
        })
    }

    /// Shipping resolution: product override → barem tier → general default
    fn resolve_shipping(
        &self,
        listing: &ListingCosts,
        product: Option<&ProductCostOverride>,
        order_value_excl: f64,
    ) -> (f64, ShippingSource) {
        if let Some(cost) = resolve_shipping_override(product) {
            return (cost, ShippingSource::ProductOverride);
        }

        let carrier = listing
            .carrier
            .as_deref()
            .or(self.settings.default_carrier.as_deref());
        let desi = listing.desi.or(self.settings.default_desi);

        if let (Some(carrier), Some(desi)) = (carrier, desi)
            && let Some(tier) = find_barem_tier(carrier, order_value_excl, desi, self.barem_rules)
        {
            return (tier.price, ShippingSource::BaremTier);
        }

        tracing::warn!(
            product_id = %listing.product_id,
            order_value = order_value_excl,
            "no barem tier matched, falling back to the default shipping cost"
        );
        (
            self.settings.default_shipping_cost.unwrap_or(0.0),
            ShippingSource::GeneralDefault,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::CalcErrorCode;
    use shared::models::{CategoryCostOverride, ProfitMethod, VatRates};

    fn make_settings() -> GeneralCostSettings {
        GeneralCostSettings {
            default_shipping_cost: Some(39.9),
            default_commission_rate: Some(21.5),
            default_withholding_rate: Some(0.0),
            default_misc_cost: None,
            default_service_fee: None,
            default_carrier: Some("Aras".to_string()),
            default_desi: Some(1.0),
            default_method: ProfitMethod::Margin,
            default_target_rate: Some(20.0),
            vat_rates: VatRates {
                sale: 20.0,
                shipping: 20.0,
                commission: 20.0,
                service_fee: 20.0,
                product_cost: 20.0,
            },
            include_cost_vat: true,
            updated_at: 0,
        }
    }

    fn make_rule(
        id: i64,
        min: f64,
        max: f64,
        max_desi: Option<f64>,
        price: f64,
    ) -> BaremRule {
        BaremRule {
            id,
            carrier: "Aras".to_string(),
            min_order_value: min,
            max_order_value: max,
            max_desi,
            price,
        }
    }

    fn make_listing(product_id: &str, cost_price: Option<f64>) -> ListingCosts {
        ListingCosts {
            product_id: product_id.to_string(),
            cost_price,
            carrier: None,
            desi: Some(3.0),
            service_fee: Some(8.49),
            extra_misc_cost: None,
            product_override: None,
            category_override: None,
        }
    }

    #[test]
    fn test_breakdown_uses_matched_barem_tier() {
        let settings = make_settings();
        let rules = vec![make_rule(1, 0.0, 500.0, Some(5.0), 27.08)];
        let engine = CostEngine::new(&settings, &rules);

        let breakdown = engine
            .breakdown(&make_listing("p-1", Some(80.0)), 175.62)
            .unwrap();

        assert!(breakdown.barem_matched);
        assert_eq!(breakdown.shipping_cost, 27.08);
    }

    #[test]
    fn test_breakdown_falls_back_to_default_shipping() {
        let settings = make_settings();
        let engine = CostEngine::new(&settings, &[]);

        let breakdown = engine
            .breakdown(&make_listing("p-1", Some(80.0)), 175.62)
            .unwrap();

        assert!(!breakdown.barem_matched);
        assert_eq!(breakdown.shipping_cost, 39.9);
    }

    #[test]
    fn test_product_commission_override_beats_category_and_general() {
        let settings = make_settings();
        let engine = CostEngine::new(&settings, &[]);

        let mut listing = make_listing("p-1", Some(80.0));
        listing.product_override = Some(ProductCostOverride {
            product_id: "p-1".to_string(),
            commission_rate: Some(15.0),
            shipping_cost: None,
            misc_cost: None,
        });
        listing.category_override = Some(CategoryCostOverride {
            category_id: "c-1".to_string(),
            commission_rate: Some(18.0),
        });

        let breakdown = engine.breakdown(&listing, 100.0).unwrap();
        assert_eq!(breakdown.commission_rate, 15.0);
        assert_eq!(breakdown.commission_amount, 15.0);
    }

    #[test]
    fn test_category_commission_override_beats_general() {
        let settings = make_settings();
        let engine = CostEngine::new(&settings, &[]);

        let mut listing = make_listing("p-1", Some(80.0));
        listing.category_override = Some(CategoryCostOverride {
            category_id: "c-1".to_string(),
            commission_rate: Some(18.0),
        });

        let breakdown = engine.breakdown(&listing, 100.0).unwrap();
        assert_eq!(breakdown.commission_rate, 18.0);
    }

    #[test]
    fn test_shipping_override_bypasses_barem() {
        let settings = make_settings();
        let rules = vec![make_rule(1, 0.0, 500.0, None, 27.08)];
        let engine = CostEngine::new(&settings, &rules);

        let mut listing = make_listing("p-1", Some(80.0));
        listing.product_override = Some(ProductCostOverride {
            product_id: "p-1".to_string(),
            commission_rate: None,
            shipping_cost: Some(0.0),
            misc_cost: None,
        });

        let breakdown = engine.breakdown(&listing, 100.0).unwrap();
        assert_eq!(breakdown.shipping_cost, 0.0);
        assert!(!breakdown.barem_matched);
    }

    #[test]
    fn test_missing_cost_price_is_an_error() {
        let settings = make_settings();
        let engine = CostEngine::new(&settings, &[]);

        let err = engine
            .breakdown(&make_listing("p-1", None), 100.0)
            .unwrap_err();
        assert_eq!(err, CalcError::MissingCostPrice("p-1".to_string()));
    }

    #[test]
    fn test_recommend_price_restabilizes_barem_tier() {
        // At order value 0 the cheap tier matches; at the solved price only
        // the expensive tier does. The engine must settle on the tier that
        // is consistent with its own recommendation.
        let settings = make_settings();
        let rules = vec![
            make_rule(1, 0.0, 100.0, None, 10.0),
            make_rule(2, 100.01, 10_000.0, None, 40.0),
        ];
        let engine = CostEngine::new(&settings, &rules);

        let mut listing = make_listing("p-1", Some(120.0));
        listing.service_fee = None;

        let result = engine
            .recommend_price(&listing, PriceTarget::new(ProfitMethod::Margin, 20.0))
            .unwrap();

        // (120 + 40) / (1 - 0.215 - 0.20) with the expensive tier
        assert_eq!(result.price_excl_vat, 273.5);
        assert!(result.breakdown.barem_matched);
        assert_eq!(result.breakdown.shipping_cost, 40.0);
    }

    #[test]
    fn test_recommend_bulk_isolates_failures() {
        let settings = make_settings();
        let rules = vec![make_rule(1, 0.0, 10_000.0, None, 27.08)];
        let engine = CostEngine::new(&settings, &rules);

        let listings = vec![
            make_listing("p-1", Some(80.0)),
            make_listing("p-2", None),
            make_listing("p-3", Some(45.0)),
        ];

        let results =
            engine.recommend_bulk(&listings, PriceTarget::new(ProfitMethod::Margin, 20.0));

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].product_id, "p-1");
        assert!(results[0].recommended.is_some());
        assert!(results[0].error.is_none());

        assert!(results[1].recommended.is_none());
        let failure = results[1].error.as_ref().unwrap();
        assert_eq!(failure.code, CalcErrorCode::MissingCostPrice);

        assert!(results[2].recommended.is_some());
    }

    #[test]
    fn test_recommend_bulk_keeps_input_order_with_mixed_errors() {
        let settings = make_settings();
        let engine = CostEngine::new(&settings, &[]);

        let mut infeasible = make_listing("p-2", Some(50.0));
        infeasible.product_override = Some(ProductCostOverride {
            product_id: "p-2".to_string(),
            commission_rate: Some(90.0),
            shipping_cost: None,
            misc_cost: None,
        });

        let listings = vec![make_listing("p-1", Some(80.0)), infeasible];
        let results =
            engine.recommend_bulk(&listings, PriceTarget::new(ProfitMethod::Margin, 20.0));

        assert_eq!(results.len(), 2);
        assert!(results[0].recommended.is_some());
        assert_eq!(
            results[1].error.as_ref().unwrap().code,
            CalcErrorCode::InfeasibleTarget
        );
    }

    #[test]
    fn test_extra_misc_cost_adds_to_resolved_misc() {
        let mut settings = make_settings();
        settings.default_misc_cost = Some(2.0);
        let engine = CostEngine::new(&settings, &[]);

        let mut listing = make_listing("p-1", Some(80.0));
        listing.extra_misc_cost = Some(1.5);

        let breakdown = engine.breakdown(&listing, 100.0).unwrap();
        assert_eq!(breakdown.misc_cost, 3.5);
    }

    #[test]
    fn test_default_service_fee_is_converted_to_inclusive() {
        let mut settings = make_settings();
        settings.default_service_fee = Some(7.075); // tax-exclusive
        let engine = CostEngine::new(&settings, &[]);

        let mut listing = make_listing("p-1", Some(80.0));
        listing.service_fee = None;

        let breakdown = engine.breakdown(&listing, 100.0).unwrap();
        // 7.075 excl @20% → 8.49 incl → back to 7.08 excl in the result
        assert_eq!(breakdown.service_fee, 7.08);
        assert_eq!(breakdown.service_fee_vat, 1.42);
    }
}
