//! Character appearances and the two aggregates built from them.
//!
//! `character_appearances` is the many-to-many link between characters and
//! episodes. It is never returned on its own: each side is flattened into the
//! other together with the appearance's role and screen time.

use serde::Serialize;
use sqlx::FromRow;

use crate::models::character::Character;
use crate::models::episode::Episode;

/// A character as cast in one episode.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CastMember {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub character: Character,
    pub role: String,
    pub screen_time_minutes: i64,
}

/// An episode a character appears in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EpisodeAppearance {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub episode: Episode,
    pub role: String,
    pub screen_time_minutes: i64,
}

/// `GET /api/episodes/{id}/characters` payload.
#[derive(Debug, Clone, Serialize)]
pub struct EpisodeWithCast {
    #[serde(flatten)]
    pub episode: Episode,
    pub characters: Vec<CastMember>,
}

/// `GET /api/characters/{id}/appearances` payload.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterWithAppearances {
    #[serde(flatten)]
    pub character: Character,
    pub appearances: Vec<EpisodeAppearance>,
}
