//! Operational endpoints: version banner, database check, probes and metrics.

use crate::services::get_metrics;
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub const VERSION_BANNER: &str = "Minimal API Version 1.0";

pub async fn version() -> &'static str {
    VERSION_BANNER
}

/// Opens a fresh connection and reports the visible databases.
///
/// Always answers 200; the outcome is in the text.
pub async fn check_database(State(state): State<AppState>) -> String {
    match state.probe.list_database_names().await {
        Ok(databases) => format!(
            "MongoDB access ok. Available databases: {}",
            databases.join(",")
        ),
        Err(e) => {
            tracing::warn!("MongoDB connection check failed: {}", e);
            format!("MongoDB access failed: {}", e)
        }
    }
}

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "movie-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.ping().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

pub async fn metrics() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
