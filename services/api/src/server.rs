use crate::cli::ServeArgs;
use crate::infra::{
    default_scoring_config, AppState, InMemoryProgramCatalog, InMemoryStudentDirectory,
};
use crate::routes::with_orientation_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use orientcam::config::AppConfig;
use orientcam::error::AppError;
use orientcam::orientation::matching::RecommendationService;
use orientcam::telemetry;
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

    let students = Arc::new(InMemoryStudentDirectory::default());
    let catalog = Arc::new(InMemoryProgramCatalog::seeded());
    let recommendation_service = Arc::new(RecommendationService::with_cap(
        students.clone(),
        catalog.clone(),
        default_scoring_config(),
        config.limits.max_recommendations,
    ));

    let app = with_orientation_routes(recommendation_service, students, catalog)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "orientation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
