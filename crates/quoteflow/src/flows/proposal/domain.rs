use serde::{Deserialize, Serialize};

use crate::flows::category::ServiceCategory;
use crate::i18n::{Locale, LocalizedText};

/// Whether a priced item is charged once or recurs monthly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BillingMode {
    OneTime,
    Monthly,
}

impl BillingMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::OneTime => "one-time",
            Self::Monthly => "monthly",
        }
    }
}

/// A sellable catalog entry. Defined once at load time, read-only afterwards.
#[derive(Debug, Clone)]
pub struct ServiceItem {
    pub id: &'static str,
    pub category: ServiceCategory,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub price: f64,
    /// Upper bound for ranged pricing ("from X to Y"), when quoted as a range.
    pub price_max: Option<f64>,
    pub billing: BillingMode,
    pub adjustable_quantity: bool,
    pub unit: Option<LocalizedText>,
    pub note: Option<LocalizedText>,
    /// Selecting this service auto-applies the monthly hosting fee.
    pub triggers_hosting: bool,
}

impl ServiceItem {
    pub fn view(&self, locale: Locale) -> ServiceView {
        ServiceView {
            id: self.id,
            category: self.category,
            name: self.name.resolve(locale),
            description: self.description.resolve(locale),
            price: self.price,
            price_max: self.price_max,
            billing: self.billing,
            adjustable_quantity: self.adjustable_quantity,
            unit: self.unit.map(|text| text.resolve(locale)),
            note: self.note.map(|text| text.resolve(locale)),
            triggers_hosting: self.triggers_hosting,
        }
    }
}

/// A named bundle: selecting it populates the selection set with each
/// constituent service at quantity 1.
#[derive(Debug, Clone)]
pub struct PackageInfo {
    pub id: &'static str,
    pub name: LocalizedText,
    pub tagline: LocalizedText,
    /// Marketing display price for the bundle; line items keep their own prices.
    pub monthly_price: f64,
    pub service_ids: &'static [&'static str],
}

impl PackageInfo {
    pub fn view(&self, locale: Locale) -> PackageView {
        PackageView {
            id: self.id,
            name: self.name.resolve(locale),
            tagline: self.tagline.resolve(locale),
            monthly_price: self.monthly_price,
            service_ids: self.service_ids,
        }
    }
}

/// Localized catalog entry as served over HTTP.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceView {
    pub id: &'static str,
    pub category: ServiceCategory,
    pub name: &'static str,
    pub description: &'static str,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,
    pub billing: BillingMode,
    pub adjustable_quantity: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
    pub triggers_hosting: bool,
}

/// Localized package as served over HTTP.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageView {
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub monthly_price: f64,
    pub service_ids: &'static [&'static str],
}

/// A catalog service held in the selection set. Price and billing are
/// snapshotted at selection time so later catalog edits do not retroactively
/// change an in-progress quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedService {
    pub service_id: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub billing: BillingMode,
}

/// Ad-hoc line item outside the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomLineItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub billing: BillingMode,
}

/// At most one discount is active on a quote at a time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "value")]
pub enum Discount {
    Percentage(f64),
    Flat(f64),
}

/// Derived totals for a quote. Recomputed on every change, never mutated in
/// place or stored independently of the inputs that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub one_time_total: f64,
    pub monthly_total: f64,
    pub hosting_fee: f64,
    pub subtotal: f64,
    pub discount_amount: f64,
    pub grand_total: f64,
}

/// Opaque identifier handed back by the proposal store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProposalId(pub String);

/// What a successful submission returns: an id plus a human-viewable URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: ProposalId,
    pub view_url: String,
}
