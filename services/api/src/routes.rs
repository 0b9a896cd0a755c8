use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json, Router};
use candidate_risk::workflows::screening::{
    screening_router, EmailReputation, PhoneReputation, ScreeningState, TextGenerator,
};
use serde_json::json;
use tower_http::cors::CorsLayer;

/// Screening API plus health, readiness, and metrics endpoints, with permissive CORS
/// so browser intake forms can post directly.
pub(crate) fn application<E, P, T>(screening: ScreeningState<E, P, T>, state: AppState) -> Router
where
    E: EmailReputation + 'static,
    P: PhoneReputation + 'static,
    T: TextGenerator + 'static,
{
    screening_router(screening)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .layer(Extension(state))
        .layer(CorsLayer::permissive())
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Acquire);
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
