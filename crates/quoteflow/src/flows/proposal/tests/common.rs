use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::flows::leads::{ContactInfo, CrmError, CrmLead, CrmPublisher};
use crate::flows::proposal::catalog::ServiceCatalog;
use crate::flows::proposal::domain::{BillingMode, ProposalId, SelectedService};
use crate::flows::proposal::repository::{ProposalRecord, ProposalSnapshot, ProposalStore};
use crate::flows::proposal::service::{
    CustomItemRequest, ProposalService, ServiceSelectionRequest,
};
use crate::flows::store::StoreError;

#[derive(Default)]
pub(super) struct MemoryProposalStore {
    records: Mutex<HashMap<String, ProposalRecord>>,
    sequence: AtomicU64,
}

impl ProposalStore for MemoryProposalStore {
    fn create(&self, snapshot: ProposalSnapshot) -> Result<ProposalRecord, StoreError> {
        let id = format!("prop-{:06}", self.sequence.fetch_add(1, Ordering::Relaxed) + 1);
        let record = ProposalRecord {
            id: ProposalId(id.clone()),
            view_url: format!("https://quotes.test/proposals/{id}"),
            snapshot,
            submitted_at: Utc::now(),
        };
        self.records
            .lock()
            .expect("store mutex poisoned")
            .insert(id, record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ProposalId) -> Result<Option<ProposalRecord>, StoreError> {
        Ok(self
            .records
            .lock()
            .expect("store mutex poisoned")
            .get(&id.0)
            .cloned())
    }
}

#[derive(Default)]
pub(super) struct RecordingCrm {
    leads: Mutex<Vec<CrmLead>>,
    pub(super) fail: bool,
}

impl RecordingCrm {
    pub(super) fn failing() -> Self {
        Self {
            leads: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub(super) fn leads(&self) -> Vec<CrmLead> {
        self.leads.lock().expect("crm mutex poisoned").clone()
    }
}

impl CrmPublisher for RecordingCrm {
    fn publish(&self, lead: CrmLead) -> Result<(), CrmError> {
        if self.fail {
            return Err(CrmError::Transport("connection refused".to_string()));
        }
        self.leads.lock().expect("crm mutex poisoned").push(lead);
        Ok(())
    }
}

pub(super) fn proposal_service() -> ProposalService<MemoryProposalStore, RecordingCrm> {
    proposal_service_with(
        Arc::new(MemoryProposalStore::default()),
        Arc::new(RecordingCrm::default()),
    )
}

pub(super) fn proposal_service_with(
    store: Arc<MemoryProposalStore>,
    crm: Arc<RecordingCrm>,
) -> ProposalService<MemoryProposalStore, RecordingCrm> {
    ProposalService::new(Arc::new(ServiceCatalog::standard()), store, crm)
}

pub(super) fn contact() -> ContactInfo {
    ContactInfo {
        name: "Dana Miller".to_string(),
        email: "dana@millerbakery.test".to_string(),
        company: Some("Miller Bakery".to_string()),
        phone: None,
    }
}

pub(super) fn select(service_id: &str, quantity: u32) -> ServiceSelectionRequest {
    ServiceSelectionRequest {
        service_id: service_id.to_string(),
        quantity,
    }
}

pub(super) fn custom(name: &str, price: f64, billing: BillingMode) -> CustomItemRequest {
    CustomItemRequest {
        name: name.to_string(),
        price,
        billing,
    }
}

pub(super) fn selected(
    service_id: &str,
    quantity: u32,
    unit_price: f64,
    billing: BillingMode,
) -> SelectedService {
    SelectedService {
        service_id: service_id.to_string(),
        quantity,
        unit_price,
        billing,
    }
}
