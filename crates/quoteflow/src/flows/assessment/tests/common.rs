use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::flows::assessment::bank::QuestionBank;
use crate::flows::assessment::domain::AssessmentId;
use crate::flows::assessment::repository::{AssessmentRecord, AssessmentSnapshot, AssessmentStore};
use crate::flows::assessment::service::{AnswerRequest, AssessmentService};
use crate::flows::leads::{ContactInfo, CrmError, CrmLead, CrmPublisher};
use crate::flows::store::StoreError;

#[derive(Default)]
pub(super) struct MemoryAssessmentStore {
    records: Mutex<HashMap<String, AssessmentRecord>>,
    sequence: AtomicU64,
}

impl AssessmentStore for MemoryAssessmentStore {
    fn create(&self, snapshot: AssessmentSnapshot) -> Result<AssessmentRecord, StoreError> {
        let id = format!("asmt-{:06}", self.sequence.fetch_add(1, Ordering::Relaxed) + 1);
        let record = AssessmentRecord {
            id: AssessmentId(id.clone()),
            view_url: format!("https://quotes.test/assessments/{id}"),
            snapshot,
            submitted_at: Utc::now(),
        };
        self.records
            .lock()
            .expect("store mutex poisoned")
            .insert(id, record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, StoreError> {
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
}

impl RecordingCrm {
    pub(super) fn leads(&self) -> Vec<CrmLead> {
        self.leads.lock().expect("crm mutex poisoned").clone()
    }
}

impl CrmPublisher for RecordingCrm {
    fn publish(&self, lead: CrmLead) -> Result<(), CrmError> {
        self.leads.lock().expect("crm mutex poisoned").push(lead);
        Ok(())
    }
}

pub(super) fn assessment_service() -> AssessmentService<MemoryAssessmentStore, RecordingCrm> {
    assessment_service_with(
        Arc::new(MemoryAssessmentStore::default()),
        Arc::new(RecordingCrm::default()),
    )
}

pub(super) fn assessment_service_with(
    store: Arc<MemoryAssessmentStore>,
    crm: Arc<RecordingCrm>,
) -> AssessmentService<MemoryAssessmentStore, RecordingCrm> {
    AssessmentService::new(Arc::new(QuestionBank::standard()), store, crm)
}

pub(super) fn contact() -> ContactInfo {
    ContactInfo {
        name: "Luis Ortega".to_string(),
        email: "luis@ortegadental.test".to_string(),
        company: Some("Ortega Dental".to_string()),
        phone: Some("+1 555 0134".to_string()),
    }
}

/// Answer every question in the bank with the given option index, falling
/// back to the last option when a question has fewer options.
pub(super) fn uniform_answers(bank: &QuestionBank, option_index: usize) -> Vec<AnswerRequest> {
    bank.questions()
        .iter()
        .map(|question| AnswerRequest {
            question_id: question.id.to_string(),
            option_index: option_index.min(question.options.len() - 1),
        })
        .collect()
}
