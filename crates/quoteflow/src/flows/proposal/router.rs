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

use super::domain::{Discount, PackageView, ProposalId, ServiceView, Totals};
use super::repository::ProposalStore;
use super::service::{
    CustomItemRequest, ProposalRequest, ProposalService, ProposalServiceError,
    ServiceSelectionRequest,
};

/// Router builder exposing the catalog and proposal endpoints.
pub fn proposal_router<S, C>(service: Arc<ProposalService<S, C>>) -> Router
where
    S: ProposalStore + 'static,
    C: CrmPublisher + 'static,
{
    Router::new()
        .route("/api/v1/catalog", get(catalog_handler::<S, C>))
        .route("/api/v1/proposals/quote", post(quote_handler::<S, C>))
        .route("/api/v1/proposals", post(submit_handler::<S, C>))
        .route(
            "/api/v1/proposals/:proposal_id",
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
pub(crate) struct CatalogResponse {
    pub(crate) locale: &'static str,
    pub(crate) services: Vec<ServiceView>,
    pub(crate) packages: Vec<PackageView>,
}

pub(crate) async fn catalog_handler<S, C>(
    State(service): State<Arc<ProposalService<S, C>>>,
    Query(query): Query<LocaleQuery>,
) -> Response
where
    S: ProposalStore + 'static,
    C: CrmPublisher + 'static,
{
    let locale = query.resolve();
    let catalog = service.catalog();
    let response = CatalogResponse {
        locale: locale.tag(),
        services: catalog
            .services()
            .iter()
            .map(|item| item.view(locale))
            .collect(),
        packages: catalog
            .packages()
            .iter()
            .map(|package| package.view(locale))
            .collect(),
    };
    (StatusCode::OK, axum::Json(response)).into_response()
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuoteRequest {
    #[serde(default)]
    pub(crate) services: Vec<ServiceSelectionRequest>,
    #[serde(default)]
    pub(crate) custom_items: Vec<CustomItemRequest>,
    #[serde(default)]
    pub(crate) discount: Option<Discount>,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuoteResponse {
    pub(crate) totals: Totals,
}

pub(crate) async fn quote_handler<S, C>(
    State(service): State<Arc<ProposalService<S, C>>>,
    axum::Json(request): axum::Json<QuoteRequest>,
) -> Response
where
    S: ProposalStore + 'static,
    C: CrmPublisher + 'static,
{
    match service.quote(
        &request.services,
        &request.custom_items,
        request.discount.as_ref(),
    ) {
        Ok(totals) => (StatusCode::OK, axum::Json(QuoteResponse { totals })).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_handler<S, C>(
    State(service): State<Arc<ProposalService<S, C>>>,
    axum::Json(request): axum::Json<ProposalRequest>,
) -> Response
where
    S: ProposalStore + 'static,
    C: CrmPublisher + 'static,
{
    match service.submit(request) {
        Ok(record) => {
            let payload = json!({
                "receipt": record.receipt(),
                "totals": record.snapshot.totals,
                "submitted_at": record.submitted_at,
            });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn fetch_handler<S, C>(
    State(service): State<Arc<ProposalService<S, C>>>,
    Path(proposal_id): Path<String>,
) -> Response
where
    S: ProposalStore + 'static,
    C: CrmPublisher + 'static,
{
    match service.get(&ProposalId(proposal_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ProposalServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    let status = match &error {
        ProposalServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ProposalServiceError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
        ProposalServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, axum::Json(payload)).into_response()
}
