//! Handlers for the `/api/orders` resource.

use archivist_core::validation::parse_id;
use archivist_db::models::order::OrderDetail;
use archivist_db::repositories::OrderRepo;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::{found, AppResult, DataAccessContext};
use crate::state::AppState;

/// GET /api/orders/{id}
///
/// The order with its customer summary and snapshot line items.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<OrderDetail>> {
    let id = parse_id(&raw_id, "order")?;
    let order = OrderRepo::find_detail(&state.pool, id)
        .await
        .context("Failed to fetch order")?;
    found(order, "Order", id).map(Json)
}
