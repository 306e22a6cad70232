//! HTTP transport adapter.
//!
//! One POST endpoint carries the whole protocol; application-level failures
//! travel inside the JSON-RPC envelope with HTTP 200, so the only non-200
//! status a client sees is 204 for notifications. The health probe is a
//! plain liveness check.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

use crate::mcp::dispatcher::{Dispatch, Dispatcher};
use crate::mcp::protocol::SERVER_NAME;

/// Builds the application router.
///
/// The `/api`-prefixed aliases keep clients working when the server sits
/// behind a function-hosting path prefix.
#[must_use]
pub fn router(dispatcher: Arc<Dispatcher>) -> Router {
    Router::new()
        .route("/mcp", post(handle_mcp))
        .route("/api/mcp", post(handle_mcp))
        .route("/health", get(health))
        .route("/api/health", get(health))
        .with_state(dispatcher)
}

/// The body arrives as a raw string so that malformed JSON reaches the
/// dispatcher's parse-error path instead of being rejected by an extractor.
async fn handle_mcp(State(dispatcher): State<Arc<Dispatcher>>, body: String) -> Response {
    match dispatcher.handle(&body) {
        Dispatch::Reply(response) => (StatusCode::OK, Json(response)).into_response(),
        Dispatch::NoContent => StatusCode::NO_CONTENT.into_response(),
    }
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVER_NAME,
        "timestamp": Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
