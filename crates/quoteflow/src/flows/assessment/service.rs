use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::flows::leads::{ContactInfo, CrmLead, CrmPublisher, LeadSource};
use crate::flows::store::StoreError;

use super::bank::QuestionBank;
use super::domain::{AssessmentAnswer, AssessmentId};
use super::recommend;
use super::repository::{AssessmentRecord, AssessmentSnapshot, AssessmentStore};
use super::scoring;

/// Service composing the question bank, scoring engine, store, and CRM hook.
pub struct AssessmentService<S, C> {
    bank: Arc<QuestionBank>,
    store: Arc<S>,
    crm: Arc<C>,
}

/// One submitted answer; the score is re-derived from the bank server-side.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnswerRequest {
    pub question_id: String,
    pub option_index: usize,
}

/// Full submission payload from the assessment UI.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssessmentRequest {
    pub contact: ContactInfo,
    pub answers: Vec<AnswerRequest>,
}

impl<S, C> AssessmentService<S, C>
where
    S: AssessmentStore + 'static,
    C: CrmPublisher + 'static,
{
    pub fn new(bank: Arc<QuestionBank>, store: Arc<S>, crm: Arc<C>) -> Self {
        Self { bank, store, crm }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Validate completeness, score, persist, and push the lead. Requires
    /// exactly one answer per question in the bank.
    pub fn submit(
        &self,
        request: AssessmentRequest,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        if !request.contact.is_complete() {
            return Err(AssessmentValidationError::IncompleteContact.into());
        }

        let answers = self.resolve_answers(&request.answers)?;

        let category_scores = scoring::category_scores(&self.bank, &answers);
        let overall_score = scoring::overall_score(&category_scores);
        let recommended_service_ids = recommend::recommended_services(&category_scores);

        let snapshot = AssessmentSnapshot {
            contact: request.contact,
            answers,
            category_scores,
            overall_score,
            recommended_service_ids,
        };

        let record = self.store.create(snapshot)?;

        let mut details = BTreeMap::new();
        details.insert(
            "overall_score".to_string(),
            record.snapshot.overall_score.to_string(),
        );
        details.insert(
            "recommendations".to_string(),
            record.snapshot.recommended_service_ids.join(","),
        );
        if let Err(err) = self.crm.publish(CrmLead {
            source: LeadSource::Assessment,
            name: record.snapshot.contact.name.clone(),
            email: record.snapshot.contact.email.clone(),
            reference: record.id.0.clone(),
            details,
        }) {
            warn!(assessment_id = %record.id.0, error = %err, "crm lead push failed");
        }

        Ok(record)
    }

    pub fn get(&self, id: &AssessmentId) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = self.store.fetch(id)?.ok_or(StoreError::NotFound)?;
        Ok(record)
    }

    /// Rebuild answers against the bank: every question answered exactly once,
    /// every option index in range, scores taken from the bank.
    fn resolve_answers(
        &self,
        requests: &[AnswerRequest],
    ) -> Result<Vec<AssessmentAnswer>, AssessmentValidationError> {
        let mut answers: Vec<AssessmentAnswer> = Vec::with_capacity(self.bank.len());
        for question in self.bank.questions() {
            let request = requests
                .iter()
                .find(|request| request.question_id == question.id)
                .ok_or_else(|| AssessmentValidationError::Unanswered(question.id.to_string()))?;
            let answer = self
                .bank
                .answer(&request.question_id, request.option_index)
                .ok_or_else(|| AssessmentValidationError::InvalidOption {
                    question_id: question.id.to_string(),
                    option_index: request.option_index,
                })?;
            answers.push(answer);
        }

        if let Some(stray) = requests
            .iter()
            .find(|request| self.bank.question(&request.question_id).is_none())
        {
            return Err(AssessmentValidationError::UnknownQuestion(
                stray.question_id.clone(),
            ));
        }

        Ok(answers)
    }
}

/// Caller-side input problems for an assessment submission.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentValidationError {
    #[error("contact name and email are required")]
    IncompleteContact,
    #[error("question '{0}' has no answer")]
    Unanswered(String),
    #[error("unknown question id '{0}'")]
    UnknownQuestion(String),
    #[error("option {option_index} does not exist on question '{question_id}'")]
    InvalidOption {
        question_id: String,
        option_index: usize,
    },
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Validation(#[from] AssessmentValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
