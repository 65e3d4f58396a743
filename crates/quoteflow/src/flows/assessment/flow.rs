//! The assessment UI state machine: intro → questions (one at a time) →
//! contact gate → results. Forward movement through the questions requires the
//! current question to be answered; the contact gate is a lead-capture rule
//! that must hold before results are revealed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::flows::leads::ContactInfo;

use super::bank::QuestionBank;
use super::domain::AssessmentAnswer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "stage", content = "index")]
pub enum AssessmentStage {
    Intro,
    Question(usize),
    Contact,
    Results,
}

/// In-memory state of one assessment session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentFlowState {
    pub stage: AssessmentStage,
    /// Keyed by question id: exactly one answer per question, re-answering
    /// replaces the prior choice.
    pub answers: BTreeMap<String, AssessmentAnswer>,
    pub contact: ContactInfo,
}

impl AssessmentFlowState {
    pub fn new() -> Self {
        Self {
            stage: AssessmentStage::Intro,
            answers: BTreeMap::new(),
            contact: ContactInfo::default(),
        }
    }

    pub fn is_complete(&self, bank: &QuestionBank) -> bool {
        bank.questions()
            .iter()
            .all(|question| self.answers.contains_key(question.id))
    }

    /// Answers in bank order, for scoring and submission.
    pub fn ordered_answers(&self, bank: &QuestionBank) -> Vec<AssessmentAnswer> {
        bank.questions()
            .iter()
            .filter_map(|question| self.answers.get(question.id).cloned())
            .collect()
    }
}

impl Default for AssessmentFlowState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssessmentAction {
    Start,
    /// Record (or replace) the answer for a question. Unknown questions and
    /// out-of-range option indices are ignored.
    Answer {
        question_id: String,
        option_index: usize,
    },
    /// Move to the next question; gated on the current one being answered.
    Next,
    Previous,
    SubmitContact(ContactInfo),
    Reset,
}

/// Pure transition function for the assessment flow.
pub fn reduce(
    mut state: AssessmentFlowState,
    action: AssessmentAction,
    bank: &QuestionBank,
) -> AssessmentFlowState {
    match action {
        AssessmentAction::Start => {
            if state.stage == AssessmentStage::Intro && !bank.is_empty() {
                state.stage = AssessmentStage::Question(0);
            }
            state
        }
        AssessmentAction::Answer {
            question_id,
            option_index,
        } => {
            if let Some(answer) = bank.answer(&question_id, option_index) {
                state.answers.insert(question_id, answer);
            }
            state
        }
        AssessmentAction::Next => {
            if let AssessmentStage::Question(index) = state.stage {
                let answered = bank
                    .questions()
                    .get(index)
                    .map_or(false, |question| state.answers.contains_key(question.id));
                if answered {
                    state.stage = if index + 1 < bank.len() {
                        AssessmentStage::Question(index + 1)
                    } else {
                        AssessmentStage::Contact
                    };
                }
            }
            state
        }
        AssessmentAction::Previous => {
            state.stage = match state.stage {
                AssessmentStage::Question(index) if index > 0 => {
                    AssessmentStage::Question(index - 1)
                }
                AssessmentStage::Question(_) => AssessmentStage::Intro,
                AssessmentStage::Contact => AssessmentStage::Question(bank.len().saturating_sub(1)),
                other => other,
            };
            state
        }
        AssessmentAction::SubmitContact(contact) => {
            // Results stay behind the lead gate until contact info is complete
            // and every question has an answer.
            if state.stage == AssessmentStage::Contact
                && contact.is_complete()
                && state.is_complete(bank)
            {
                state.contact = contact;
                state.stage = AssessmentStage::Results;
            } else {
                state.contact = contact;
            }
            state
        }
        AssessmentAction::Reset => AssessmentFlowState::new(),
    }
}
