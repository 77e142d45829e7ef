pub mod catalog;
pub mod health;
pub mod lore;

use axum::routing::{get, post};
use axum::Router;

use crate::config::ApiVariant;
use crate::handlers::meta;
use crate::state::AppState;

/// Build the `/api` route tree for `variant`.
///
/// ```text
/// /hello                GET   greeting
/// /echo                 POST  echo JSON body
/// ```
///
/// plus the resource routes of [`lore::router`] or [`catalog::router`].
pub fn api_routes(variant: ApiVariant) -> Router<AppState> {
    let common = Router::new()
        .route("/hello", get(meta::hello))
        .route("/echo", post(meta::echo));

    let resources = match variant {
        ApiVariant::Lore => lore::router(),
        ApiVariant::Catalog => catalog::router(),
    };

    common.merge(resources)
}
