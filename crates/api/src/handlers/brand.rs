//! Handlers for the `/api/brands` resource.

use archivist_core::validation::parse_id;
use archivist_db::models::brand::Brand;
use archivist_db::repositories::BrandRepo;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::{found, AppResult, DataAccessContext};
use crate::response::Listing;
use crate::state::AppState;

/// GET /api/brands
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Listing<Brand>>> {
    let brands = BrandRepo::list(&state.pool)
        .await
        .context("Failed to fetch brands")?;
    Ok(Json(Listing::new("brands", brands)))
}

/// GET /api/brands/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Brand>> {
    let id = parse_id(&raw_id, "brand")?;
    let brand = BrandRepo::find_by_id(&state.pool, id)
        .await
        .context("Failed to fetch brand")?;
    found(brand, "Brand", id).map(Json)
}
