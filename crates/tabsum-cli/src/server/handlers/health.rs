//! Liveness probe handler.

use axum::Json;

/// Report that the service is up.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
