use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::flows::leads::ContactInfo;
use crate::flows::store::StoreError;

use super::domain::{
    CustomLineItem, Discount, ProposalId, SelectedService, SubmissionReceipt, Totals,
};

/// Finalized quote handed across the submission boundary. Prices and billing
/// modes are frozen copies; totals are computed once at submit time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalSnapshot {
    pub contact: ContactInfo,
    pub services: Vec<SelectedService>,
    pub custom_items: Vec<CustomLineItem>,
    pub discount: Option<Discount>,
    pub totals: Totals,
    /// Assessment correlation id when the quote was seeded from one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_assessment: Option<String>,
}

/// Stored proposal as returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalRecord {
    pub id: ProposalId,
    pub view_url: String,
    pub snapshot: ProposalSnapshot,
    pub submitted_at: DateTime<Utc>,
}

impl ProposalRecord {
    pub fn receipt(&self) -> SubmissionReceipt {
        SubmissionReceipt {
            id: self.id.clone(),
            view_url: self.view_url.clone(),
        }
    }
}

/// Storage abstraction for the external "create proposal" operation. The
/// backing system assigns the opaque id and human-viewable URL.
pub trait ProposalStore: Send + Sync {
    fn create(&self, snapshot: ProposalSnapshot) -> Result<ProposalRecord, StoreError>;
    fn fetch(&self, id: &ProposalId) -> Result<Option<ProposalRecord>, StoreError>;
}
