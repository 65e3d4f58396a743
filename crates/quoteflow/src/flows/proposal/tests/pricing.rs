use super::common::*;
use crate::flows::proposal::catalog::ServiceCatalog;
use crate::flows::proposal::domain::{BillingMode, CustomLineItem, Discount};
use crate::flows::proposal::pricing::{
    calculate_totals, discount_amount, grand_total, hosting_fee, monthly_total, one_time_total,
};

fn custom_item(id: &str, price: f64, billing: BillingMode) -> CustomLineItem {
    CustomLineItem {
        id: id.to_string(),
        name: format!("custom {id}"),
        price,
        billing,
    }
}

#[test]
fn totals_split_by_billing_mode() {
    let services = vec![
        selected("brand-strategy", 1, 1200.0, BillingMode::OneTime),
        selected("landing-page", 3, 600.0, BillingMode::OneTime),
        selected("seo-monthly", 1, 650.0, BillingMode::Monthly),
    ];
    let custom = vec![
        custom_item("c1", 250.0, BillingMode::OneTime),
        custom_item("c2", 100.0, BillingMode::Monthly),
    ];

    assert_eq!(one_time_total(&services, &custom), 1200.0 + 1800.0 + 250.0);
    assert_eq!(monthly_total(&services, &custom), 650.0 + 100.0);
}

#[test]
fn adding_a_line_item_never_decreases_totals() {
    let mut services = vec![selected("brand-strategy", 1, 1200.0, BillingMode::OneTime)];
    let custom = Vec::new();

    let before_one_time = one_time_total(&services, &custom);
    let before_monthly = monthly_total(&services, &custom);

    services.push(selected("seo-monthly", 1, 650.0, BillingMode::Monthly));
    services.push(selected("copywriting", 4, 90.0, BillingMode::OneTime));

    assert!(one_time_total(&services, &custom) >= before_one_time);
    assert!(monthly_total(&services, &custom) >= before_monthly);
}

#[test]
fn hosting_fee_applies_when_triggering_service_is_selected() {
    let catalog = ServiceCatalog::standard();
    let services = vec![selected("website-build", 1, 2500.0, BillingMode::OneTime)];
    assert_eq!(
        hosting_fee(&catalog, &services),
        ServiceCatalog::HOSTING_FEE_MONTHLY
    );
}

#[test]
fn hosting_fee_is_zero_without_triggering_services() {
    let catalog = ServiceCatalog::standard();
    let services = vec![selected("brand-strategy", 1, 1200.0, BillingMode::OneTime)];
    assert_eq!(hosting_fee(&catalog, &services), 0.0);
    assert_eq!(hosting_fee(&catalog, &[]), 0.0);
}

#[test]
fn explicit_hosting_selection_suppresses_the_auto_fee() {
    let catalog = ServiceCatalog::standard();
    let triggering_only = vec![selected("website-build", 1, 2500.0, BillingMode::OneTime)];
    let with_explicit = vec![
        selected("website-build", 1, 2500.0, BillingMode::OneTime),
        selected(
            ServiceCatalog::HOSTING_SERVICE_ID,
            1,
            50.0,
            BillingMode::Monthly,
        ),
    ];

    // Never double-charged: the auto fee drops to zero, the explicit line's
    // own price flows through the monthly total instead.
    let auto = calculate_totals(&catalog, &triggering_only, &[], None);
    let explicit = calculate_totals(&catalog, &with_explicit, &[], None);

    assert_eq!(auto.hosting_fee, ServiceCatalog::HOSTING_FEE_MONTHLY);
    assert_eq!(auto.monthly_total, 0.0);
    assert_eq!(explicit.hosting_fee, 0.0);
    assert_eq!(explicit.monthly_total, 50.0);
    assert_eq!(auto.grand_total, explicit.grand_total);
}

#[test]
fn percentage_discount_on_round_subtotal() {
    let catalog = ServiceCatalog::standard();
    let custom = vec![custom_item("c1", 1000.0, BillingMode::OneTime)];
    let totals = calculate_totals(&catalog, &[], &custom, Some(&Discount::Percentage(20.0)));

    assert_eq!(totals.subtotal, 1000.0);
    assert_eq!(totals.discount_amount, 200.0);
    assert_eq!(totals.grand_total, 800.0);
}

#[test]
fn percentage_discount_rounds_to_currency_precision() {
    assert_eq!(discount_amount(999.99, Some(&Discount::Percentage(33.0))), 330.0);
    assert_eq!(discount_amount(100.0, Some(&Discount::Percentage(12.345))), 12.35);
}

#[test]
fn percentage_discount_is_capped_at_one_hundred() {
    assert_eq!(discount_amount(500.0, Some(&Discount::Percentage(250.0))), 500.0);
}

#[test]
fn flat_discount_is_clamped_to_the_subtotal() {
    let catalog = ServiceCatalog::standard();
    let custom = vec![custom_item("c1", 100.0, BillingMode::OneTime)];
    let totals = calculate_totals(&catalog, &[], &custom, Some(&Discount::Flat(500.0)));

    assert_eq!(totals.discount_amount, 100.0);
    assert_eq!(totals.grand_total, 0.0);
}

#[test]
fn absent_or_non_positive_discounts_are_zero() {
    assert_eq!(discount_amount(1000.0, None), 0.0);
    assert_eq!(discount_amount(1000.0, Some(&Discount::Percentage(0.0))), 0.0);
    assert_eq!(discount_amount(1000.0, Some(&Discount::Percentage(-5.0))), 0.0);
    assert_eq!(discount_amount(1000.0, Some(&Discount::Flat(-20.0))), 0.0);
}

#[test]
fn grand_total_never_goes_negative() {
    // Belt and suspenders: even an unclamped discount cannot push below zero.
    assert_eq!(grand_total(100.0, 0.0, 0.0, 250.0), 0.0);
    assert_eq!(grand_total(100.0, 50.0, 50.0, 0.0), 200.0);
}

#[test]
fn recomputation_is_bit_identical() {
    let catalog = ServiceCatalog::standard();
    let services = vec![
        selected("website-build", 1, 2500.0, BillingMode::OneTime),
        selected("seo-monthly", 1, 650.0, BillingMode::Monthly),
    ];
    let custom = vec![custom_item("c1", 75.5, BillingMode::Monthly)];
    let discount = Discount::Percentage(15.0);

    let first = calculate_totals(&catalog, &services, &custom, Some(&discount));
    let second = calculate_totals(&catalog, &services, &custom, Some(&discount));

    assert_eq!(first, second);
}

#[test]
fn hosting_fee_lands_on_the_monthly_side_of_the_subtotal() {
    let catalog = ServiceCatalog::standard();
    let services = vec![selected("website-build", 1, 2500.0, BillingMode::OneTime)];
    let totals = calculate_totals(&catalog, &services, &[], None);

    assert_eq!(totals.one_time_total, 2500.0);
    assert_eq!(totals.monthly_total, 0.0);
    assert_eq!(totals.hosting_fee, 50.0);
    assert_eq!(totals.subtotal, 2550.0);
    assert_eq!(totals.grand_total, 2550.0);
}
