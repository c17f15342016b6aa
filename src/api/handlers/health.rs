use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::AppState;

/// Health check endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub tracked_servers: usize,
}

/// GET /health
///
/// Simple health check endpoint for monitoring service status.
/// Reports 503 once the status cache has been stopped.
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let stopped = state.cache.is_stopped().await;
    let response = HealthResponse {
        status: if stopped { "stopped" } else { "ok" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        tracked_servers: state.cache.len().await,
    };

    let code = if stopped {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };
    (code, Json(response))
}
