//! End-to-end exercises of the assessment flow: question bank delivery,
//! scoring submission, and the handoff payload the quote builder consumes.

mod common {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Arc, Mutex};

    use chrono::Utc;

    use quoteflow::flows::assessment::{
        AssessmentId, AssessmentRecord, AssessmentService, AssessmentSnapshot, AssessmentStore,
        QuestionBank,
    };
    use quoteflow::flows::leads::{CrmError, CrmLead, CrmPublisher};
    use quoteflow::flows::store::StoreError;

    #[derive(Default)]
    pub struct MemoryAssessmentStore {
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
    pub struct NullCrm;

    impl CrmPublisher for NullCrm {
        fn publish(&self, _lead: CrmLead) -> Result<(), CrmError> {
            Ok(())
        }
    }

    pub fn service() -> Arc<AssessmentService<MemoryAssessmentStore, NullCrm>> {
        Arc::new(AssessmentService::new(
            Arc::new(QuestionBank::standard()),
            Arc::new(MemoryAssessmentStore::default()),
            Arc::new(NullCrm),
        ))
    }
}

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use quoteflow::flows::assessment::{assessment_router, QuestionBank};
use quoteflow::flows::proposal::{reduce, BuilderAction, BuilderState, BuilderStep, ServiceCatalog};

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is json")
}

fn answers_json(bank: &QuestionBank, option_index: usize) -> Value {
    Value::Array(
        bank.questions()
            .iter()
            .map(|question| {
                json!({
                    "question_id": question.id,
                    "option_index": option_index.min(question.options.len() - 1),
                })
            })
            .collect(),
    )
}

#[tokio::test]
async fn question_bank_is_served_localized() {
    let app = assessment_router(common::service());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/assessment/questions?locale=fr")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["locale"], "fr");
    let questions = body["questions"].as_array().expect("questions array");
    assert_eq!(questions.len(), 24);
    assert_eq!(questions[0]["options"].as_array().expect("options").len(), 3);
}

#[tokio::test]
async fn weak_submission_returns_scores_and_seeds_the_builder() {
    let app = assessment_router(common::service());
    let bank = QuestionBank::standard();

    let payload = json!({
        "contact": { "name": "Luis Ortega", "email": "luis@ortegadental.test" },
        "answers": answers_json(&bank, 9),
    });
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/assessment/submissions?locale=es")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["overall_score"], 0);
    assert_eq!(body["overall_band"], "critical");
    assert_eq!(body["overall_label"], "Requiere atención");
    assert_eq!(
        body["category_scores"].as_array().expect("scores").len(),
        10
    );

    // Cross-flow handoff: recommendations plus the assessment id pre-populate
    // a fresh quote.
    let assessment_id = body["id"].as_str().expect("assessment id").to_string();
    let recommended: Vec<String> = body["recommended_service_ids"]
        .as_array()
        .expect("recommendations")
        .iter()
        .map(|id| id.as_str().expect("id string").to_string())
        .collect();
    assert!(!recommended.is_empty());

    let catalog = ServiceCatalog::standard();
    let state = reduce(
        BuilderState::new(),
        BuilderAction::LoadRecommendations {
            service_ids: recommended.clone(),
            assessment_id: assessment_id.clone(),
        },
        &catalog,
    );
    assert_eq!(state.step, BuilderStep::Build);
    assert_eq!(state.selections.len(), recommended.len());
    assert_eq!(state.source_assessment.as_deref(), Some(assessment_id.as_str()));

    // The stored record is retrievable afterwards.
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/api/v1/assessment/submissions/{assessment_id}"))
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn incomplete_submissions_are_rejected() {
    let app = assessment_router(common::service());
    let bank = QuestionBank::standard();

    let mut answers = answers_json(&bank, 0);
    answers.as_array_mut().expect("answers array").pop();
    let payload = json!({
        "contact": { "name": "Luis Ortega", "email": "luis@ortegadental.test" },
        "answers": answers,
    });
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/assessment/submissions")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unknown_assessments_return_not_found() {
    let app = assessment_router(common::service());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/assessment/submissions/asmt-404404")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
