use axum::Json;
use serde_json::{json, Value};

/// GET /
pub async fn home_handler() -> &'static str {
    "Resume Tracker Backend is Running"
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "ats-api"
    }))
}
