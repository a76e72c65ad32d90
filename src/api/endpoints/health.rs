//! Service liveness endpoint.

use axum::Json;
use serde_json::{json, Value};

use crate::api::types::envelope;
use crate::config;

/// `GET /health` — connection check.
pub async fn check() -> Json<Value> {
    envelope(json!({
        "service": config::APP_NAME,
        "version": config::APP_VERSION,
    }))
}
