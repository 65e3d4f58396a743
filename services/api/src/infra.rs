use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use quoteflow::flows::assessment::{
    AssessmentId, AssessmentRecord, AssessmentSnapshot, AssessmentStore,
};
use quoteflow::flows::leads::{CrmError, CrmLead, CrmPublisher};
use quoteflow::flows::proposal::{ProposalId, ProposalRecord, ProposalSnapshot, ProposalStore};
use quoteflow::flows::store::StoreError;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Proposal storage backed by process memory. Ids are sequential and opaque;
/// view URLs are minted from the configured public base.
pub(crate) struct InMemoryProposalStore {
    view_base: String,
    records: Mutex<HashMap<String, ProposalRecord>>,
    sequence: AtomicU64,
}

impl InMemoryProposalStore {
    pub(crate) fn new(view_base: impl Into<String>) -> Self {
        Self {
            view_base: view_base.into().trim_end_matches('/').to_string(),
            records: Mutex::new(HashMap::new()),
            sequence: AtomicU64::new(0),
        }
    }
}

impl ProposalStore for InMemoryProposalStore {
    fn create(&self, snapshot: ProposalSnapshot) -> Result<ProposalRecord, StoreError> {
        let id = format!(
            "prop-{:06}",
            self.sequence.fetch_add(1, Ordering::Relaxed) + 1
        );
        let record = ProposalRecord {
            id: ProposalId(id.clone()),
            view_url: format!("{}/{id}", self.view_base),
            snapshot,
            submitted_at: Utc::now(),
        };
        self.records
            .lock()
            .expect("proposal store mutex poisoned")
            .insert(id, record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ProposalId) -> Result<Option<ProposalRecord>, StoreError> {
        Ok(self
            .records
            .lock()
            .expect("proposal store mutex poisoned")
            .get(&id.0)
            .cloned())
    }
}

/// Assessment storage backed by process memory, same shape as the proposal
/// store.
pub(crate) struct InMemoryAssessmentStore {
    view_base: String,
    records: Mutex<HashMap<String, AssessmentRecord>>,
    sequence: AtomicU64,
}

impl InMemoryAssessmentStore {
    pub(crate) fn new(view_base: impl Into<String>) -> Self {
        Self {
            view_base: view_base.into().trim_end_matches('/').to_string(),
            records: Mutex::new(HashMap::new()),
            sequence: AtomicU64::new(0),
        }
    }
}

impl AssessmentStore for InMemoryAssessmentStore {
    fn create(&self, snapshot: AssessmentSnapshot) -> Result<AssessmentRecord, StoreError> {
        let id = format!(
            "asmt-{:06}",
            self.sequence.fetch_add(1, Ordering::Relaxed) + 1
        );
        let record = AssessmentRecord {
            id: AssessmentId(id.clone()),
            view_url: format!("{}/{id}", self.view_base),
            snapshot,
            submitted_at: Utc::now(),
        };
        self.records
            .lock()
            .expect("assessment store mutex poisoned")
            .insert(id, record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, StoreError> {
        Ok(self
            .records
            .lock()
            .expect("assessment store mutex poisoned")
            .get(&id.0)
            .cloned())
    }
}

/// CRM adapter that records leads in memory and logs each one. Stands in for
/// the real outbound integration in local and demo runs.
#[derive(Default)]
pub(crate) struct InMemoryCrmPublisher {
    leads: Mutex<Vec<CrmLead>>,
}

impl CrmPublisher for InMemoryCrmPublisher {
    fn publish(&self, lead: CrmLead) -> Result<(), CrmError> {
        info!(
            source = ?lead.source,
            reference = %lead.reference,
            "crm lead captured"
        );
        self.leads
            .lock()
            .expect("crm mutex poisoned")
            .push(lead);
        Ok(())
    }
}

impl InMemoryCrmPublisher {
    pub(crate) fn leads(&self) -> Vec<CrmLead> {
        self.leads.lock().expect("crm mutex poisoned").clone()
    }
}
