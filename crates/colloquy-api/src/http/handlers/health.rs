//! Health check handler.

use axum::Json;
use serde::Serialize;

/// Response body for the health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: String,
}

/// GET /api/health - Liveness check, no state required.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: format!("colloquy {} is running", env!("CARGO_PKG_VERSION")),
    })
}
