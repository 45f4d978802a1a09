use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryReportRepository};
use crate::routes::with_analysis_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use deposit_case::config::AppConfig;
use deposit_case::error::AppError;
use deposit_case::telemetry;
use deposit_case::workflows::deposit::{CaseAnalysisService, SystemClock};
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

    let repository = Arc::new(InMemoryReportRepository::default());
    let clock = Arc::new(SystemClock::new(config.calendar));
    let analysis_service = Arc::new(CaseAnalysisService::new(repository, clock));

    let app = with_analysis_routes(analysis_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        utc_offset_hours = config.calendar.utc_offset_hours,
        "deposit case analyzer ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
