use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use postforge::config::AppConfig;
use postforge::error::AppError;
use postforge::telemetry;
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::{quality_service, AppState};
use crate::routes::with_content_routes;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = quality_service(&config.generation, args.seed);

    let app = with_content_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        default_variations = config.generation.default_variation_count,
        seeded = config.generation.seed.is_some() || args.seed.is_some(),
        "content quality service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
