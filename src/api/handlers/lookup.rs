use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::api::AppState;
use crate::lookup;

/// GET /lookup/{identifier}
///
/// Resolves a `<field>_<host:port>` identifier to its display string.
/// The first request for a key answers with the per-field default while
/// the probe runs in the background; later requests see cached data.
pub async fn lookup_handler(
    State(state): State<Arc<AppState>>,
    Path(identifier): Path<String>,
) -> Response {
    if state.cache.is_stopped().await {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }

    match lookup::resolve(&state.cache, &state.config, &identifier).await {
        Some(text) => (StatusCode::OK, text).into_response(),
        None => {
            tracing::debug!("Unresolvable lookup identifier: {}", identifier);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::StatusCache;
    use crate::config::Config;
    use std::time::Duration;

    fn make_state() -> Arc<AppState> {
        Arc::new(AppState {
            config: Config::default(),
            cache: Arc::new(StatusCache::new(
                Duration::from_secs(60),
                Duration::from_millis(500),
            )),
        })
    }

    #[tokio::test]
    async fn test_lookup_unknown_field_is_404() {
        let state = make_state();
        let response = lookup_handler(State(state.clone()), Path("latency_127.0.0.1:1".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        state.cache.stop().await;
    }

    #[tokio::test]
    async fn test_lookup_malformed_identifier_is_404() {
        let state = make_state();
        let response = lookup_handler(State(state), Path("motd".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_lookup_after_stop_is_503() {
        let state = make_state();
        state.cache.stop().await;
        let response = lookup_handler(State(state), Path("motd_127.0.0.1:1".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
