//! Handlers for the `/api/users` resource.

use archivist_core::validation::parse_id;
use archivist_db::models::order::OrderSummary;
use archivist_db::models::user::User;
use archivist_db::repositories::{OrderRepo, UserRepo};
use axum::extract::{Path, State};
use axum::Json;

use crate::error::{found, AppResult, DataAccessContext};
use crate::response::Listing;
use crate::state::AppState;

/// GET /api/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Listing<User>>> {
    let users = UserRepo::list(&state.pool)
        .await
        .context("Failed to fetch users")?;
    Ok(Json(Listing::new("users", users)))
}

/// GET /api/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<User>> {
    let id = parse_id(&raw_id, "user")?;
    let user = UserRepo::find_by_id(&state.pool, id)
        .await
        .context("Failed to fetch user")?;
    found(user, "User", id).map(Json)
}

/// GET /api/users/{id}/orders
pub async fn orders(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Listing<OrderSummary>>> {
    let id = parse_id(&raw_id, "user")?;
    let (user, orders) = tokio::try_join!(
        UserRepo::find_by_id(&state.pool, id),
        OrderRepo::list_for_user(&state.pool, id),
    )
    .context("Failed to fetch user orders")?;
    found(user, "User", id)?;

    Ok(Json(Listing::new("orders", orders)))
}
