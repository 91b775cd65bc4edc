use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// GET /health
/// Returns service status, version and the current server time.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "resume-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
