//! Greeting and echo endpoints served by both variants.

use archivist_core::types::Timestamp;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub message: &'static str,
    pub timestamp: Timestamp,
}

#[derive(Debug, Serialize)]
pub struct EchoResponse {
    pub message: &'static str,
    pub data: Value,
    pub timestamp: Timestamp,
}

/// GET /api/hello
pub async fn hello(State(state): State<AppState>) -> Json<HelloResponse> {
    Json(HelloResponse {
        message: state.variant.greeting(),
        timestamp: chrono::Utc::now(),
    })
}

/// POST /api/echo
///
/// Returns the JSON request body unchanged under `data`.
pub async fn echo(body: Result<Json<Value>, JsonRejection>) -> AppResult<Json<EchoResponse>> {
    let Json(data) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    Ok(Json(EchoResponse {
        message: "Echo response",
        data,
        timestamp: chrono::Utc::now(),
    }))
}

/// Fallback for unmatched paths, so 404s share the JSON error shape.
pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}
