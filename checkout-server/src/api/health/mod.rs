//! Health check endpoint

use crate::core::ServerState;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(health))
}

/// GET /api/health
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "checkout-server",
    }))
}
