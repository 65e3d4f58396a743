use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::flows::leads::ContactInfo;
use crate::flows::store::StoreError;

use super::domain::{AssessmentAnswer, AssessmentId, CategoryScore};

/// Finalized assessment handed across the submission boundary: contact, raw
/// answers, and everything the scoring engine derived from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSnapshot {
    pub contact: ContactInfo,
    pub answers: Vec<AssessmentAnswer>,
    pub category_scores: Vec<CategoryScore>,
    pub overall_score: u8,
    pub recommended_service_ids: Vec<String>,
}

/// Stored assessment as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: AssessmentId,
    pub view_url: String,
    pub snapshot: AssessmentSnapshot,
    pub submitted_at: DateTime<Utc>,
}

/// Storage abstraction for the external "save assessment" operation.
pub trait AssessmentStore: Send + Sync {
    fn create(&self, snapshot: AssessmentSnapshot) -> Result<AssessmentRecord, StoreError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, StoreError>;
}
