use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::application;
use axum_prometheus::PrometheusMetricLayer;
use candidate_risk::config::{AppConfig, ConfigError};
use candidate_risk::error::AppError;
use candidate_risk::telemetry;
use candidate_risk::workflows::screening::{
    http_screening_service, ScreeningSetupError, ScreeningState,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let screening = match http_screening_service(&config.providers) {
        Ok(service) => ScreeningState::configured(Arc::new(service)),
        Err(ScreeningSetupError::Config(ConfigError::MissingCredentials)) => {
            warn!("provider API keys missing; screening requests will fail until configured");
            ScreeningState::unconfigured()
        }
        Err(err) => return Err(err.into()),
    };

    let app = application(screening, app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        timeout = ?config.providers.timeout,
        "candidate risk screener ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
