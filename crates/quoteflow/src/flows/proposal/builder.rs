//! The builder state machine: a pure reducer over the quote-in-progress.
//!
//! Step transitions (`Build ⇄ Review → Submit`) and selection mutations are all
//! expressed as [`BuilderAction`] variants dispatched through [`reduce`]. The
//! reducer accepts step transitions unconditionally; "at least one line item
//! before review" is enforced at the boundary (UI or service), not here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::flows::leads::ContactInfo;

use super::catalog::ServiceCatalog;
use super::domain::{BillingMode, CustomLineItem, Discount, SelectedService, SubmissionReceipt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuilderStep {
    Build,
    Review,
    Submit,
}

/// In-memory state of one quote-building session. One instance per session;
/// nothing here is shared or persisted before an explicit submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuilderState {
    pub step: BuilderStep,
    /// Keyed by service id: reselecting toggles off, keys stay unique.
    pub selections: BTreeMap<String, SelectedService>,
    pub custom_items: Vec<CustomLineItem>,
    pub discount: Option<Discount>,
    /// Set while the selection set is exactly a known package's constituents.
    pub active_package: Option<String>,
    pub contact: ContactInfo,
    pub is_submitting: bool,
    pub submission: Option<SubmissionReceipt>,
    pub error: Option<String>,
    /// Assessment id when the session was seeded from assessment results.
    pub source_assessment: Option<String>,
    /// Counter scoped to this instance; feeds custom line item ids.
    next_custom_item: u64,
}

impl BuilderState {
    pub fn new() -> Self {
        Self {
            step: BuilderStep::Build,
            selections: BTreeMap::new(),
            custom_items: Vec::new(),
            discount: None,
            active_package: None,
            contact: ContactInfo::default(),
            is_submitting: false,
            submission: None,
            error: None,
            source_assessment: None,
            next_custom_item: 0,
        }
    }

    /// Selected services in stable key order, for pricing and snapshots.
    pub fn selected_services(&self) -> Vec<SelectedService> {
        self.selections.values().cloned().collect()
    }

    /// True once the quote has anything priceable on it.
    pub fn has_line_items(&self) -> bool {
        !self.selections.is_empty() || !self.custom_items.is_empty()
    }
}

impl Default for BuilderState {
    fn default() -> Self {
        Self::new()
    }
}

/// Tagged command union dispatched through [`reduce`].
#[derive(Debug, Clone, PartialEq)]
pub enum BuilderAction {
    /// Select a catalog service, or deselect it if already selected.
    ToggleService { service_id: String },
    /// Set the quantity of a selected service. Values below 1 are a no-op;
    /// removal is an explicit toggle, never an implicit side effect.
    SetQuantity { service_id: String, quantity: u32 },
    /// Replace the entire selection set with a package's constituents at
    /// quantity 1. Destructive to prior service selections by design.
    SelectPackage { package_id: String },
    AddCustomItem {
        name: String,
        price: f64,
        billing: BillingMode,
    },
    RemoveCustomItem { item_id: String },
    /// Setting a discount replaces any prior one.
    SetDiscount(Discount),
    ClearDiscount,
    UpdateContact(ContactInfo),
    /// Seed the selection set from assessment recommendations and return to
    /// the build step regardless of where the session was.
    LoadRecommendations {
        service_ids: Vec<String>,
        assessment_id: String,
    },
    /// Build → Review → Submit.
    Advance,
    /// Review → Build (non-destructive), Submit → Review.
    Back,
    SubmitStart,
    SubmitSuccess(SubmissionReceipt),
    SubmitError { message: String },
    Reset,
}

/// Snapshot a catalog service into the selection set at quantity 1.
fn snapshot(catalog: &ServiceCatalog, service_id: &str) -> Option<SelectedService> {
    catalog.service(service_id).map(|item| SelectedService {
        service_id: item.id.to_string(),
        quantity: 1,
        unit_price: item.price,
        billing: item.billing,
    })
}

/// Pure transition function. Unknown service/package ids are ignored rather
/// than rejected; the catalog is the caller's read-only dependency.
pub fn reduce(mut state: BuilderState, action: BuilderAction, catalog: &ServiceCatalog) -> BuilderState {
    match action {
        BuilderAction::ToggleService { service_id } => {
            if state.selections.remove(&service_id).is_some() {
                // Dropping a package member means the set no longer matches
                // the package preset.
                let was_member = state
                    .active_package
                    .as_deref()
                    .and_then(|id| catalog.package(id))
                    .map_or(false, |package| {
                        package.service_ids.contains(&service_id.as_str())
                    });
                if was_member {
                    state.active_package = None;
                }
            } else if let Some(selected) = snapshot(catalog, &service_id) {
                state.selections.insert(service_id, selected);
            }
            state
        }
        BuilderAction::SetQuantity {
            service_id,
            quantity,
        } => {
            if quantity >= 1 {
                if let Some(selected) = state.selections.get_mut(&service_id) {
                    selected.quantity = quantity;
                }
            }
            state
        }
        BuilderAction::SelectPackage { package_id } => {
            let Some(package) = catalog.package(&package_id) else {
                return state;
            };
            state.selections = package
                .service_ids
                .iter()
                .filter_map(|id| snapshot(catalog, id).map(|selected| (id.to_string(), selected)))
                .collect();
            state.active_package = Some(package_id);
            state
        }
        BuilderAction::AddCustomItem {
            name,
            price,
            billing,
        } => {
            state.next_custom_item += 1;
            state.custom_items.push(CustomLineItem {
                id: format!("custom-{}", state.next_custom_item),
                name,
                price,
                billing,
            });
            state
        }
        BuilderAction::RemoveCustomItem { item_id } => {
            state.custom_items.retain(|item| item.id != item_id);
            state
        }
        BuilderAction::SetDiscount(discount) => {
            state.discount = Some(match discount {
                Discount::Percentage(value) => Discount::Percentage(value.clamp(0.0, 100.0)),
                Discount::Flat(value) => Discount::Flat(value.max(0.0)),
            });
            state
        }
        BuilderAction::ClearDiscount => {
            state.discount = None;
            state
        }
        BuilderAction::UpdateContact(contact) => {
            state.contact = contact;
            state
        }
        BuilderAction::LoadRecommendations {
            service_ids,
            assessment_id,
        } => {
            state.selections = service_ids
                .iter()
                .filter_map(|id| snapshot(catalog, id).map(|selected| (id.clone(), selected)))
                .collect();
            state.active_package = None;
            state.source_assessment = Some(assessment_id);
            state.step = BuilderStep::Build;
            state
        }
        BuilderAction::Advance => {
            state.step = match state.step {
                BuilderStep::Build => BuilderStep::Review,
                BuilderStep::Review | BuilderStep::Submit => BuilderStep::Submit,
            };
            state
        }
        BuilderAction::Back => {
            state.step = match state.step {
                BuilderStep::Build | BuilderStep::Review => BuilderStep::Build,
                BuilderStep::Submit => BuilderStep::Review,
            };
            state
        }
        BuilderAction::SubmitStart => {
            state.is_submitting = true;
            state.error = None;
            state
        }
        BuilderAction::SubmitSuccess(receipt) => {
            state.is_submitting = false;
            state.submission = Some(receipt);
            state
        }
        BuilderAction::SubmitError { message } => {
            // Selections survive a failed submit; the user may retry.
            state.is_submitting = false;
            state.error = Some(message);
            state
        }
        BuilderAction::Reset => BuilderState::new(),
    }
}
