//! Handlers for the `/api/categories` resource.

use archivist_core::pagination::Page;
use archivist_core::validation::parse_id;
use archivist_db::models::category::Category;
use archivist_db::models::product::Product;
use archivist_db::repositories::{CategoryRepo, ProductRepo};
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;

use crate::error::{found, AppResult, DataAccessContext};
use crate::query::SortedPageParams;
use crate::response::Listing;
use crate::state::AppState;

/// GET /api/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Listing<Category>>> {
    let categories = CategoryRepo::list(&state.pool)
        .await
        .context("Failed to fetch categories")?;
    Ok(Json(Listing::new("categories", categories)))
}

/// GET /api/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Category>> {
    let id = parse_id(&raw_id, "category")?;
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await
        .context("Failed to fetch category")?;
    found(category, "Category", id).map(Json)
}

/// GET /api/categories/{id}/children
pub async fn children(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Listing<Category>>> {
    let id = parse_id(&raw_id, "category")?;
    let (parent, children) = tokio::try_join!(
        CategoryRepo::find_by_id(&state.pool, id),
        CategoryRepo::list_children(&state.pool, id),
    )
    .context("Failed to fetch subcategories")?;
    found(parent, "Category", id)?;

    Ok(Json(Listing::new("categories", children)))
}

/// GET /api/categories/{id}/products?page=&limit=&sort_by=&sort_order=
pub async fn products(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    params: Result<Query<SortedPageParams>, QueryRejection>,
) -> AppResult<Json<Page<Product>>> {
    let id = parse_id(&raw_id, "category")?;
    let Query(params) = params?;
    let (filter, page_request) = params.into_category_filter(id)?;

    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await
        .context("Failed to fetch category products")?;
    found(category, "Category", id)?;

    let page = ProductRepo::search(&state.pool, &filter, page_request)
        .await
        .context("Failed to fetch category products")?;
    Ok(Json(page))
}
