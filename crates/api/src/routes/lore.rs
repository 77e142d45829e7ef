//! Route definitions for the lore variant.

use axum::routing::get;
use axum::Router;

use crate::handlers::{character, episode};
use crate::state::AppState;

/// Routes mounted at `/api` by `lore-api`.
///
/// ```text
/// GET /episodes                                 -> episode::list
/// GET /episodes/{id}                            -> episode::get_by_id
/// GET /episodes/{id}/characters                 -> episode::characters
///
/// GET /characters                               -> character::list
/// GET /characters/{id}                          -> character::get_by_id
/// GET /characters/{id}/appearances              -> character::appearances
/// GET /characters/search/{query}                -> character::search
/// GET /characters/affiliation/{affiliation}     -> character::by_affiliation
/// ```
pub fn router() -> Router<AppState> {
    let episode_routes = Router::new()
        .route("/", get(episode::list))
        .route("/{id}", get(episode::get_by_id))
        .route("/{id}/characters", get(episode::characters));

    let character_routes = Router::new()
        .route("/", get(character::list))
        .route("/search/{query}", get(character::search))
        .route("/affiliation/{affiliation}", get(character::by_affiliation))
        .route("/{id}", get(character::get_by_id))
        .route("/{id}/appearances", get(character::appearances));

    Router::new()
        .nest("/episodes", episode_routes)
        .nest("/characters", character_routes)
}
