use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::flows::leads::{ContactInfo, CrmLead, CrmPublisher, LeadSource};
use crate::flows::store::StoreError;

use super::catalog::ServiceCatalog;
use super::domain::{BillingMode, CustomLineItem, Discount, ProposalId, SelectedService, Totals};
use super::pricing;
use super::repository::{ProposalRecord, ProposalSnapshot, ProposalStore};

/// Service composing the catalog, quote engine, proposal store, and CRM hook.
pub struct ProposalService<S, C> {
    catalog: Arc<ServiceCatalog>,
    store: Arc<S>,
    crm: Arc<C>,
}

/// One requested catalog line: the service re-snapshots price and billing
/// from the catalog so submitted quotes stay server-authoritative.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceSelectionRequest {
    pub service_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// Requested custom line item; ids are assigned server-side.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CustomItemRequest {
    pub name: String,
    pub price: f64,
    pub billing: BillingMode,
}

/// Full submission payload from the builder UI.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProposalRequest {
    pub contact: ContactInfo,
    #[serde(default)]
    pub services: Vec<ServiceSelectionRequest>,
    #[serde(default)]
    pub custom_items: Vec<CustomItemRequest>,
    #[serde(default)]
    pub discount: Option<Discount>,
    #[serde(default)]
    pub source_assessment: Option<String>,
}

impl<S, C> ProposalService<S, C>
where
    S: ProposalStore + 'static,
    C: CrmPublisher + 'static,
{
    pub fn new(catalog: Arc<ServiceCatalog>, store: Arc<S>, crm: Arc<C>) -> Self {
        Self {
            catalog,
            store,
            crm,
        }
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    /// Stateless totals preview for the builder UI.
    pub fn quote(
        &self,
        services: &[ServiceSelectionRequest],
        custom_items: &[CustomItemRequest],
        discount: Option<&Discount>,
    ) -> Result<Totals, ProposalServiceError> {
        let services = self.resolve_services(services)?;
        let custom_items = materialize_custom_items(custom_items)?;
        Ok(pricing::calculate_totals(
            &self.catalog,
            &services,
            &custom_items,
            discount,
        ))
    }

    /// Validate, price, persist, and hand the lead to the CRM. The CRM push is
    /// best-effort: a failure there is logged, not surfaced to the client.
    pub fn submit(&self, request: ProposalRequest) -> Result<ProposalRecord, ProposalServiceError> {
        if !request.contact.is_complete() {
            return Err(ValidationError::IncompleteContact.into());
        }
        if request.services.is_empty() && request.custom_items.is_empty() {
            return Err(ValidationError::EmptySelection.into());
        }

        let services = self.resolve_services(&request.services)?;
        let custom_items = materialize_custom_items(&request.custom_items)?;
        let totals =
            pricing::calculate_totals(&self.catalog, &services, &custom_items, request.discount.as_ref());

        let snapshot = ProposalSnapshot {
            contact: request.contact,
            services,
            custom_items,
            discount: request.discount,
            totals,
            source_assessment: request.source_assessment,
        };

        let record = self.store.create(snapshot)?;

        let mut details = BTreeMap::new();
        details.insert(
            "grand_total".to_string(),
            format!("{:.2}", record.snapshot.totals.grand_total),
        );
        details.insert("view_url".to_string(), record.view_url.clone());
        if let Err(err) = self.crm.publish(CrmLead {
            source: LeadSource::Proposal,
            name: record.snapshot.contact.name.clone(),
            email: record.snapshot.contact.email.clone(),
            reference: record.id.0.clone(),
            details,
        }) {
            warn!(proposal_id = %record.id.0, error = %err, "crm lead push failed");
        }

        Ok(record)
    }

    pub fn get(&self, id: &ProposalId) -> Result<ProposalRecord, ProposalServiceError> {
        let record = self.store.fetch(id)?.ok_or(StoreError::NotFound)?;
        Ok(record)
    }

    fn resolve_services(
        &self,
        requests: &[ServiceSelectionRequest],
    ) -> Result<Vec<SelectedService>, ValidationError> {
        let mut resolved: Vec<SelectedService> = Vec::with_capacity(requests.len());
        for request in requests {
            let item = self
                .catalog
                .service(&request.service_id)
                .ok_or_else(|| ValidationError::UnknownService(request.service_id.clone()))?;
            // Duplicate ids collapse into one entry; quantity minimum is 1.
            if resolved
                .iter()
                .any(|selected| selected.service_id == request.service_id)
            {
                continue;
            }
            resolved.push(SelectedService {
                service_id: item.id.to_string(),
                quantity: request.quantity.max(1),
                unit_price: item.price,
                billing: item.billing,
            });
        }
        Ok(resolved)
    }
}

fn materialize_custom_items(
    requests: &[CustomItemRequest],
) -> Result<Vec<CustomLineItem>, ValidationError> {
    requests
        .iter()
        .enumerate()
        .map(|(index, request)| {
            if request.name.trim().is_empty() {
                return Err(ValidationError::UnnamedCustomItem);
            }
            if request.price <= 0.0 {
                return Err(ValidationError::NonPositiveCustomPrice(
                    request.name.clone(),
                ));
            }
            Ok(CustomLineItem {
                id: format!("custom-{}", index + 1),
                name: request.name.clone(),
                price: request.price,
                billing: request.billing,
            })
        })
        .collect()
}

/// Caller-side input problems, reported before anything is priced or stored.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("contact name and email are required")]
    IncompleteContact,
    #[error("at least one service or custom item is required")]
    EmptySelection,
    #[error("unknown service id '{0}'")]
    UnknownService(String),
    #[error("custom items need a name")]
    UnnamedCustomItem,
    #[error("custom item '{0}' must have a positive price")]
    NonPositiveCustomPrice(String),
}

/// Error raised by the proposal service.
#[derive(Debug, thiserror::Error)]
pub enum ProposalServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
