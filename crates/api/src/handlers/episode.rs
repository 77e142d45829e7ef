//! Handlers for the `/api/episodes` resource.

use archivist_core::validation::parse_id;
use archivist_db::models::appearance::EpisodeWithCast;
use archivist_db::models::episode::Episode;
use archivist_db::repositories::EpisodeRepo;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::{found, AppResult, DataAccessContext};
use crate::response::Listing;
use crate::state::AppState;

/// GET /api/episodes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Listing<Episode>>> {
    let episodes = EpisodeRepo::list(&state.pool)
        .await
        .context("Failed to fetch episodes")?;
    Ok(Json(Listing::new("episodes", episodes)))
}

/// GET /api/episodes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Episode>> {
    let id = parse_id(&raw_id, "episode")?;
    let episode = EpisodeRepo::find_by_id(&state.pool, id)
        .await
        .context("Failed to fetch episode")?;
    found(episode, "Episode", id).map(Json)
}

/// GET /api/episodes/{id}/characters
pub async fn characters(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<EpisodeWithCast>> {
    let id = parse_id(&raw_id, "episode")?;
    let episode = EpisodeRepo::find_with_cast(&state.pool, id)
        .await
        .context("Failed to fetch episode with characters")?;
    found(episode, "Episode", id).map(Json)
}
