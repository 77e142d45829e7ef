//! Liveness and database connectivity probes.

use archivist_core::types::Timestamp;
use archivist_db::repositories::{EpisodeRepo, ProductRepo};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

use crate::config::ApiVariant;
use crate::state::AppState;

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Binary name, e.g. `lore-api`.
    pub service: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub timestamp: Timestamp,
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: state.variant.service_name(),
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now(),
    })
}

/// GET /health/db
///
/// Counts the variant's primary entity to prove the schema is readable.
/// Responds 500 with `database: "disconnected"` when the query fails.
pub async fn database(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let (key, count) = match state.variant {
        ApiVariant::Lore => ("episodes_count", EpisodeRepo::count(&state.pool).await),
        ApiVariant::Catalog => ("products_count", ProductRepo::count(&state.pool).await),
    };
    let timestamp = chrono::Utc::now();

    match count {
        Ok(count) => {
            let mut body = json!({
                "status": "ok",
                "database": "connected",
                "timestamp": timestamp,
            });
            body[key] = json!(count);
            (StatusCode::OK, Json(body))
        }
        Err(err) => {
            tracing::error!(error = %err, "Database health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "error",
                    "database": "disconnected",
                    "error": err.to_string(),
                    "timestamp": timestamp,
                })),
            )
        }
    }
}
