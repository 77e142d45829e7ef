//! Handlers for the `/api/suppliers` resource.

use archivist_core::validation::parse_id;
use archivist_db::models::supplier::Supplier;
use archivist_db::repositories::SupplierRepo;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::{found, AppResult, DataAccessContext};
use crate::response::Listing;
use crate::state::AppState;

/// GET /api/suppliers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Listing<Supplier>>> {
    let suppliers = SupplierRepo::list(&state.pool)
        .await
        .context("Failed to fetch suppliers")?;
    Ok(Json(Listing::new("suppliers", suppliers)))
}

/// GET /api/suppliers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Supplier>> {
    let id = parse_id(&raw_id, "supplier")?;
    let supplier = SupplierRepo::find_by_id(&state.pool, id)
        .await
        .context("Failed to fetch supplier")?;
    found(supplier, "Supplier", id).map(Json)
}
