//! HTTP API module for mcpinger
//!
//! Provides REST API endpoints for health checks and cached server status.
//!
//! # Endpoints
//! - `GET /health` — health check
//! - `GET /lookup/{identifier}` — resolve a `<field>_<host:port>` identifier
//! - `GET /status/{key}` — raw status snapshot for one server key
//! - `POST /cache/clear` — prune finished cache entries

pub mod handlers;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::cache::StatusCache;
use crate::config::Config;

/// Application state shared with endpoints
pub struct AppState {
    pub config: Config,
    pub cache: Arc<StatusCache>,
}

/// Creates the main Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/lookup/{identifier}", get(handlers::lookup_handler))
        .route("/status/{key}", get(handlers::status_handler))
        .route("/cache/clear", post(handlers::cache_clear_handler))
        .with_state(state)
}
