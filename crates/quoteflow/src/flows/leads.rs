use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Contact details captured before a proposal or assessment is finalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl ContactInfo {
    /// True when the lead-capture gate is satisfied.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }
}

/// Which flow produced a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadSource {
    Proposal,
    Assessment,
}

/// Payload pushed to the CRM after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrmLead {
    pub source: LeadSource,
    pub name: String,
    pub email: String,
    /// Identifier of the stored proposal/assessment for correlation.
    pub reference: String,
    pub details: BTreeMap<String, String>,
}

/// Trait describing the outbound CRM hook (e.g. a Notion or HubSpot adapter).
pub trait CrmPublisher: Send + Sync {
    fn publish(&self, lead: CrmLead) -> Result<(), CrmError>;
}

/// CRM dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum CrmError {
    #[error("crm transport unavailable: {0}")]
    Transport(String),
}
