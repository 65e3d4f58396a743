//! The quote engine: pure functions from selections to money.
//!
//! `calculate_totals` is the only entry point callers should need; the
//! individual functions exist for reuse and direct testing.

use super::catalog::ServiceCatalog;
use super::domain::{BillingMode, CustomLineItem, Discount, SelectedService, Totals};

/// Round to currency precision (2 decimal places).
pub(crate) fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sum of one-time charges: selected services at `unit_price × quantity` plus
/// one-time custom items.
pub fn one_time_total(services: &[SelectedService], custom_items: &[CustomLineItem]) -> f64 {
    let service_sum: f64 = services
        .iter()
        .filter(|service| service.billing == BillingMode::OneTime)
        .map(|service| service.unit_price * f64::from(service.quantity))
        .sum();
    let custom_sum: f64 = custom_items
        .iter()
        .filter(|item| item.billing == BillingMode::OneTime)
        .map(|item| item.price)
        .sum();
    service_sum + custom_sum
}

/// Sum of recurring monthly charges, same shape as [`one_time_total`].
pub fn monthly_total(services: &[SelectedService], custom_items: &[CustomLineItem]) -> f64 {
    let service_sum: f64 = services
        .iter()
        .filter(|service| service.billing == BillingMode::Monthly)
        .map(|service| service.unit_price * f64::from(service.quantity))
        .sum();
    let custom_sum: f64 = custom_items
        .iter()
        .filter(|item| item.billing == BillingMode::Monthly)
        .map(|item| item.price)
        .sum();
    service_sum + custom_sum
}

/// Auto-applied monthly hosting fee.
///
/// Returns the fixed fee when any selected service triggers hosting, unless
/// the explicit hosting service is itself selected — its own price already
/// covers hosting, so the auto-fee is suppressed to avoid double-charging.
pub fn hosting_fee(catalog: &ServiceCatalog, services: &[SelectedService]) -> f64 {
    let explicit_hosting = services
        .iter()
        .any(|service| service.service_id == ServiceCatalog::HOSTING_SERVICE_ID);
    if explicit_hosting {
        return 0.0;
    }

    let triggered = services.iter().any(|service| {
        catalog
            .service(&service.service_id)
            .map_or(false, |item| item.triggers_hosting)
    });

    if triggered {
        ServiceCatalog::HOSTING_FEE_MONTHLY
    } else {
        0.0
    }
}

/// Discount applied against a subtotal.
///
/// Percentage values are capped at 100 and the result is rounded to currency
/// precision; flat discounts are clamped so they never exceed the subtotal.
pub fn discount_amount(subtotal: f64, discount: Option<&Discount>) -> f64 {
    match discount {
        None => 0.0,
        Some(Discount::Percentage(value)) => {
            if *value <= 0.0 {
                0.0
            } else {
                round_currency(subtotal * value.min(100.0) / 100.0)
            }
        }
        Some(Discount::Flat(value)) => {
            if *value <= 0.0 {
                0.0
            } else {
                value.min(subtotal)
            }
        }
    }
}

/// A quote is never negative, regardless of discount size.
pub fn grand_total(one_time: f64, monthly: f64, hosting: f64, discount_amt: f64) -> f64 {
    (one_time + monthly + hosting - discount_amt).max(0.0)
}

/// Compose the full [`Totals`] record. The hosting fee sits on the monthly
/// side of the quote; the subtotal is the sum of all three components.
pub fn calculate_totals(
    catalog: &ServiceCatalog,
    services: &[SelectedService],
    custom_items: &[CustomLineItem],
    discount: Option<&Discount>,
) -> Totals {
    let one_time = one_time_total(services, custom_items);
    let monthly = monthly_total(services, custom_items);
    let hosting = hosting_fee(catalog, services);
    let subtotal = one_time + monthly + hosting;
    let discount_amt = discount_amount(subtotal, discount);

    Totals {
        one_time_total: one_time,
        monthly_total: monthly,
        hosting_fee: hosting,
        subtotal,
        discount_amount: discount_amt,
        grand_total: grand_total(one_time, monthly, hosting, discount_amt),
    }
}
