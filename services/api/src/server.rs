use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryAssessmentStore, InMemoryCrmPublisher, InMemoryProposalStore};
use crate::routes::with_flow_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use quoteflow::config::AppConfig;
use quoteflow::error::AppError;
use quoteflow::flows::assessment::{AssessmentService, QuestionBank};
use quoteflow::flows::proposal::{ProposalService, ServiceCatalog};
use quoteflow::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let crm = Arc::new(InMemoryCrmPublisher::default());
    let proposal_store = Arc::new(InMemoryProposalStore::new(
        config.server.proposal_view_base.clone(),
    ));
    let assessment_store = Arc::new(InMemoryAssessmentStore::new(
        config.server.assessment_view_base.clone(),
    ));
    let proposals = Arc::new(ProposalService::new(
        Arc::new(ServiceCatalog::standard()),
        proposal_store,
        crm.clone(),
    ));
    let assessments = Arc::new(AssessmentService::new(
        Arc::new(QuestionBank::standard()),
        assessment_store,
        crm,
    ));

    let app = with_flow_routes(proposals, assessments)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "quote and assessment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
