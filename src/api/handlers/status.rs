use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

use crate::api::AppState;
use crate::cache::ProbeOutcome;
use crate::minecraft::ServerStatus;

/// Raw status snapshot for one server key
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub key: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ServerStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub removed: usize,
}

/// GET /status/{key}
///
/// Returns the cached probe outcome for `key`, registering the key and
/// triggering a stale refresh as a side effect.
pub async fn status_handler(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Response {
    let handle = match state.cache.get(&key).await {
        Ok(handle) => handle,
        Err(e) => {
            tracing::debug!("Status request rejected: {}", e);
            return StatusCode::SERVICE_UNAVAILABLE.into_response();
        }
    };

    let response = match handle.poll().await {
        ProbeOutcome::Pending => StatusResponse {
            key,
            state: "pending".to_string(),
            status: None,
            error: None,
        },
        ProbeOutcome::Ready(status) => StatusResponse {
            key,
            state: "ready".to_string(),
            status: Some(status),
            error: None,
        },
        ProbeOutcome::Failed(e) => StatusResponse {
            key,
            state: "failed".to_string(),
            status: None,
            error: Some(e.to_string()),
        },
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// POST /cache/clear
///
/// Prunes entries whose probe has finished. Running probes are kept.
pub async fn cache_clear_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let removed = state.cache.invalidate_all().await;
    tracing::debug!("Cache clear removed {} finished entries", removed);
    (StatusCode::OK, Json(ClearResponse { removed }))
}
