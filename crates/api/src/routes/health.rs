use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::handlers::fallback;
use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process is serving requests.
    pub status: &'static str,
    pub message: &'static str,
}

/// GET /api/health -- static liveness signal, independent of storage.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Movie Watchlist API is running",
    })
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .method_not_allowed_fallback(fallback::method_not_allowed)
}
