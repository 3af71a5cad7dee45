//! Health check endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Which store backs this process (`postgres` or `memory`)
    pub store: &'static str,
}

/// GET /health - liveness only, never queries the store
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        store: state.store.kind(),
    })
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    #[tokio::test]
    async fn health_reports_backend() {
        let state = Arc::new(AppState::new(Arc::new(MemoryStore::new())));
        let Json(body) = health(State(state)).await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.store, "memory");
    }
}
