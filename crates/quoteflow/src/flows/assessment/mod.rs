//! The marketing self-assessment flow: static question bank, pure scoring,
//! the category → service recommendation mapping, the paginated flow reducer,
//! and the submission boundary behind store/CRM traits.

pub mod bank;
pub mod domain;
pub mod flow;
pub mod recommend;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use bank::QuestionBank;
pub use domain::{
    AssessmentAnswer, AssessmentId, AssessmentOption, AssessmentQuestion, CategoryScore,
    QuestionView, ScoreBand, MAX_OPTION_SCORE,
};
pub use flow::{reduce, AssessmentAction, AssessmentFlowState, AssessmentStage};
pub use recommend::{recommended_services, RECOMMENDATION_THRESHOLD};
pub use repository::{AssessmentRecord, AssessmentSnapshot, AssessmentStore};
pub use router::assessment_router;
pub use scoring::{category_scores, overall_score};
pub use service::{
    AnswerRequest, AssessmentRequest, AssessmentService, AssessmentServiceError,
    AssessmentValidationError,
};
