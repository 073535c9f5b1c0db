use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::startup::AppState;

/// Store connectivity report for the `/test` route.
///
/// Never returns an error status: a missing or unreachable store is part of
/// the report, not a failure of the report.
pub async fn test_database(State(state): State<AppState>) -> impl IntoResponse {
    let url_status = if state.db.is_configured() {
        "set"
    } else {
        "not set"
    };

    let mut report = json!({
        "backend": "running",
        "database": "mongodb",
        "database_url": url_status,
        "database_name": state.db.name(),
        "connection_status": "not configured",
        "collections": [],
    });

    if !state.db.is_configured() {
        return Json(report);
    }

    match state.db.collection_names().await {
        Ok(mut names) => {
            names.truncate(10);
            report["connection_status"] = json!("connected");
            report["collections"] = json!(names);
        }
        Err(e) => {
            tracing::warn!("Store diagnostic failed: {}", e);
            report["connection_status"] = json!(format!("error: {}", e));
        }
    }

    Json(report)
}
