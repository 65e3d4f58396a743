use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use quoteflow::flows::assessment::{assessment_router, AssessmentService, AssessmentStore};
use quoteflow::flows::leads::CrmPublisher;
use quoteflow::flows::proposal::{proposal_router, ProposalService, ProposalStore};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_flow_routes<PS, AS, C>(
    proposals: Arc<ProposalService<PS, C>>,
    assessments: Arc<AssessmentService<AS, C>>,
) -> axum::Router
where
    PS: ProposalStore + 'static,
    AS: AssessmentStore + 'static,
    C: CrmPublisher + 'static,
{
    proposal_router(proposals)
        .merge(assessment_router(assessments))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
