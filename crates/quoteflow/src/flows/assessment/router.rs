use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::flows::leads::CrmPublisher;
use crate::flows::store::StoreError;
use crate::i18n::Locale;

use super::domain::{AssessmentId, CategoryScore, QuestionView, ScoreBand};
use super::repository::AssessmentStore;
use super::service::{AssessmentRequest, AssessmentService, AssessmentServiceError};

/// Router builder exposing the question bank and assessment endpoints.
pub fn assessment_router<S, C>(service: Arc<AssessmentService<S, C>>) -> Router
where
    S: AssessmentStore + 'static,
    C: CrmPublisher + 'static,
{
    Router::new()
        .route(
            "/api/v1/assessment/questions",
            get(questions_handler::<S, C>),
        )
        .route(
            "/api/v1/assessment/submissions",
            post(submit_handler::<S, C>),
        )
        .route(
            "/api/v1/assessment/submissions/:assessment_id",
            get(fetch_handler::<S, C>),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LocaleQuery {
    #[serde(default)]
    locale: Option<String>,
}

impl LocaleQuery {
    fn resolve(&self) -> Locale {
        self.locale
            .as_deref()
            .map(Locale::from_tag)
            .unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct QuestionBankResponse {
    pub(crate) locale: &'static str,
    pub(crate) questions: Vec<QuestionView>,
}

pub(crate) async fn questions_handler<S, C>(
    State(service): State<Arc<AssessmentService<S, C>>>,
    Query(query): Query<LocaleQuery>,
) -> Response
where
    S: AssessmentStore + 'static,
    C: CrmPublisher + 'static,
{
    let locale = query.resolve();
    let response = QuestionBankResponse {
        locale: locale.tag(),
        questions: service
            .bank()
            .questions()
            .iter()
            .map(|question| question.view(locale))
            .collect(),
    };
    (StatusCode::OK, axum::Json(response)).into_response()
}

/// Category score decorated with its user-visible band.
#[derive(Debug, Serialize)]
pub(crate) struct CategoryScoreView {
    #[serde(flatten)]
    pub(crate) score: CategoryScore,
    pub(crate) band: ScoreBand,
    pub(crate) label: &'static str,
    pub(crate) color: &'static str,
}

fn banded(score: &CategoryScore, locale: Locale) -> CategoryScoreView {
    let band = ScoreBand::for_score(score.percentage);
    CategoryScoreView {
        score: score.clone(),
        band,
        label: band.label(locale),
        color: band.color(),
    }
}

pub(crate) async fn submit_handler<S, C>(
    State(service): State<Arc<AssessmentService<S, C>>>,
    Query(query): Query<LocaleQuery>,
    axum::Json(request): axum::Json<AssessmentRequest>,
) -> Response
where
    S: AssessmentStore + 'static,
    C: CrmPublisher + 'static,
{
    let locale = query.resolve();
    match service.submit(request) {
        Ok(record) => {
            let overall_band = ScoreBand::for_score(record.snapshot.overall_score);
            let payload = json!({
                "id": record.id,
                "view_url": record.view_url,
                "submitted_at": record.submitted_at,
                "overall_score": record.snapshot.overall_score,
                "overall_band": overall_band,
                "overall_label": overall_band.label(locale),
                "overall_color": overall_band.color(),
                "category_scores": record
                    .snapshot
                    .category_scores
                    .iter()
                    .map(|score| banded(score, locale))
                    .collect::<Vec<_>>(),
                "recommended_service_ids": record.snapshot.recommended_service_ids,
            });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn fetch_handler<S, C>(
    State(service): State<Arc<AssessmentService<S, C>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    S: AssessmentStore + 'static,
    C: CrmPublisher + 'static,
{
    match service.get(&AssessmentId(assessment_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: AssessmentServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    let status = match &error {
        AssessmentServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AssessmentServiceError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
        AssessmentServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, axum::Json(payload)).into_response()
}
