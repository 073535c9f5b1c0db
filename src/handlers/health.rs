use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::services::get_metrics;
use crate::startup::AppState;

/// Liveness probe. An intentionally unconfigured store still counts as
/// alive; a configured store that stops answering pings does not.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let store_ok = if state.db.is_configured() {
        state.db.health_check().await.is_ok()
    } else {
        true
    };

    let (status, label) = if store_ok {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    (
        status,
        Json(json!({
            "status": label,
            "service": state.config.service_name,
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

/// Readiness probe. Ready means the store is configured and answering.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.health_check().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ready" }))),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "not ready" })),
        ),
    }
}

/// Prometheus metrics endpoint.
pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
