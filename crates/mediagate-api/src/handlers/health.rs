//! Health check handlers.

use axum::{http::StatusCode, response::IntoResponse, Json};

/// Service banner at the root path.
pub async fn banner() -> impl IntoResponse {
    (StatusCode::OK, "Media upload service running")
}

/// Liveness probe.
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}
