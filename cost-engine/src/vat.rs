//! VAT conversion helpers
//!
//! Five cost components carry their own VAT rate (sale, shipping,
//! commission, service fee, cost of goods). Amounts convert between
//! tax-exclusive and tax-inclusive per component rate; the net VAT payable
//! is the sales VAT minus whatever input VAT is deductible.

use rust_decimal::prelude::*;

/// Convert a tax-exclusive amount to tax-inclusive
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use cost_engine::vat::excl_to_incl;
///
/// assert_eq!(
///     excl_to_incl(Decimal::from(100), Decimal::from(20)),
///     Decimal::from(120)
/// );
/// ```
#[inline]
pub fn excl_to_incl(amount: Decimal, rate_pct: Decimal) -> Decimal {
    amount * (Decimal::ONE_HUNDRED + rate_pct) / Decimal::ONE_HUNDRED
}

/// Convert a tax-inclusive amount to tax-exclusive
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use cost_engine::vat::incl_to_excl;
///
/// assert_eq!(
///     incl_to_excl(Decimal::from(120), Decimal::from(20)),
///     Decimal::from(100)
/// );
/// ```
#[inline]
pub fn incl_to_excl(amount: Decimal, rate_pct: Decimal) -> Decimal {
    amount * Decimal::ONE_HUNDRED / (Decimal::ONE_HUNDRED + rate_pct)
}

/// VAT portion of a tax-exclusive amount
#[inline]
pub fn vat_of_excl(amount: Decimal, rate_pct: Decimal) -> Decimal {
    amount * rate_pct / Decimal::ONE_HUNDRED
}

/// Net VAT payable: sales VAT minus deductible input VAT
///
/// Cost-of-goods VAT is deductible only when the seller can offset it
/// (`include_cost_vat`, a business policy toggle). A negative result is a
/// refundable position and is returned as-is; only its contribution to the
/// total-expense aggregate is floored at zero, by the caller.
pub fn net_vat_payable(
    sales_vat: Decimal,
    shipping_vat: Decimal,
    commission_vat: Decimal,
    service_fee_vat: Decimal,
    cost_vat: Decimal,
    include_cost_vat: bool,
) -> Decimal {
    let deductible = shipping_vat
        + commission_vat
        + service_fee_vat
        + if include_cost_vat {
            cost_vat
        } else {
            Decimal::ZERO
        };
    sales_vat - deductible
}
