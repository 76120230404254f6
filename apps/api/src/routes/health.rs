use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};

pub const SERVICE_NAME: &str = "disha-api";

/// GET /health
/// Unauthenticated liveness probe.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "service": SERVICE_NAME
    }))
}
