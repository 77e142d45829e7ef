//! Handlers for the `/api/characters` resource.

use archivist_core::validation::{parse_id, required_text, search_term};
use archivist_db::models::appearance::CharacterWithAppearances;
use archivist_db::models::character::Character;
use archivist_db::repositories::CharacterRepo;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::{found, AppResult, DataAccessContext};
use crate::response::Listing;
use crate::state::AppState;

/// GET /api/characters
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Listing<Character>>> {
    let characters = CharacterRepo::list(&state.pool)
        .await
        .context("Failed to fetch characters")?;
    Ok(Json(Listing::new("characters", characters)))
}

/// GET /api/characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Character>> {
    let id = parse_id(&raw_id, "character")?;
    let character = CharacterRepo::find_by_id(&state.pool, id)
        .await
        .context("Failed to fetch character")?;
    found(character, "Character", id).map(Json)
}

/// GET /api/characters/{id}/appearances
pub async fn appearances(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<CharacterWithAppearances>> {
    let id = parse_id(&raw_id, "character")?;
    let character = CharacterRepo::find_with_appearances(&state.pool, id)
        .await
        .context("Failed to fetch character with appearances")?;
    found(character, "Character", id).map(Json)
}

/// GET /api/characters/search/{query}
pub async fn search(
    State(state): State<AppState>,
    Path(raw_query): Path<String>,
) -> AppResult<Json<Listing<Character>>> {
    let term = search_term(&raw_query)?;
    let characters = CharacterRepo::search(&state.pool, term)
        .await
        .context("Failed to search characters")?;
    Ok(Json(Listing::new("characters", characters).with("query", term)))
}

/// GET /api/characters/affiliation/{affiliation}
pub async fn by_affiliation(
    State(state): State<AppState>,
    Path(raw_affiliation): Path<String>,
) -> AppResult<Json<Listing<Character>>> {
    let affiliation = required_text(&raw_affiliation, "Affiliation")?;
    let characters = CharacterRepo::list_by_affiliation(&state.pool, affiliation)
        .await
        .context("Failed to fetch characters by affiliation")?;
    Ok(Json(
        Listing::new("characters", characters).with("affiliation", affiliation),
    ))
}
