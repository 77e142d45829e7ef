//! Handlers for the `/api/products` resource.

use archivist_core::pagination::Page;
use archivist_core::validation::parse_id;
use archivist_db::models::product::{Product, ProductDetail};
use archivist_db::models::review::Review;
use archivist_db::repositories::{ProductRepo, ReviewRepo};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;

use crate::error::{found, AppResult, DataAccessContext};
use crate::query::{LimitParams, PageParams, ProductSearchParams};
use crate::response::Listing;
use crate::state::AppState;

/// GET /api/products?page=&limit=
pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> AppResult<Json<Page<Product>>> {
    let Query(params) = params?;
    let page = ProductRepo::list(&state.pool, params.page_request())
        .await
        .context("Failed to fetch products")?;
    Ok(Json(page))
}

/// GET /api/products/search
///
/// Every criterion is optional; with none set the result equals
/// `GET /api/products`.
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<ProductSearchParams>, QueryRejection>,
) -> AppResult<Json<Page<Product>>> {
    let Query(params) = params?;
    let (filter, page_request) = params.into_filter()?;
    tracing::debug!(?filter, ?page_request, "Product search");

    let page = ProductRepo::search(&state.pool, &filter, page_request)
        .await
        .context("Failed to search products")?;
    Ok(Json(page))
}

/// GET /api/products/featured?limit=
pub async fn featured(
    State(state): State<AppState>,
    params: Result<Query<LimitParams>, QueryRejection>,
) -> AppResult<Json<Listing<Product>>> {
    let Query(params) = params?;
    let products = ProductRepo::list_featured(&state.pool, params.limit())
        .await
        .context("Failed to fetch featured products")?;
    Ok(Json(Listing::new("products", products)))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Product>> {
    let id = parse_id(&raw_id, "product")?;
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await
        .context("Failed to fetch product")?;
    found(product, "Product", id).map(Json)
}

/// GET /api/products/{id}/full
pub async fn full(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<ProductDetail>> {
    let id = parse_id(&raw_id, "product")?;
    let detail = ProductRepo::find_full(&state.pool, id)
        .await
        .context("Failed to fetch product details")?;
    found(detail, "Product", id).map(Json)
}

/// GET /api/products/{id}/reviews?page=&limit=
pub async fn reviews(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> AppResult<Json<Page<Review>>> {
    let id = parse_id(&raw_id, "product")?;
    let Query(params) = params?;

    let product = ProductRepo::find_by_id(&state.pool, id)
        .await
        .context("Failed to fetch product reviews")?;
    found(product, "Product", id)?;

    let page = ReviewRepo::list_for_product(&state.pool, id, params.page_request())
        .await
        .context("Failed to fetch product reviews")?;
    Ok(Json(page))
}
