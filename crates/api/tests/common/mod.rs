#![allow(dead_code)]

use std::sync::Arc;

use archivist_api::config::{ApiVariant, ServerConfig};
use archivist_api::router::build_app_router;
use archivist_api::state::AppState;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as the only CORS origin and a 30-second
/// request timeout.
pub fn test_config(variant: ApiVariant) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: variant.default_database_url().to_string(),
        db_max_connections: 1,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        seed_on_startup: false,
    }
}

/// Build the production router around `pool` without seeding it.
pub fn build_test_app(pool: SqlitePool, variant: ApiVariant) -> Router {
    let config = test_config(variant);
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        variant,
    };
    build_app_router(state, &config)
}

/// Seed `pool` with the variant's reference data, then build the router.
pub async fn seeded_app(pool: SqlitePool, variant: ApiVariant) -> Router {
    archivist_db::seed_if_empty(&pool, variant.schema())
        .await
        .expect("seed data should apply");
    build_test_app(pool, variant)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `id` field of every element of a JSON array.
pub fn ids(items: &serde_json::Value) -> Vec<i64> {
    items
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|item| item["id"].as_i64().expect("expected an integer id"))
        .collect()
}
