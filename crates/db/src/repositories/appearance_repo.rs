//! Repository for the `character_appearances` link table.
//!
//! Both directions of the character/episode relation are resolved here.
//! Only active appearances linking two active rows are returned.

use archivist_core::types::DbId;

use crate::models::appearance::{CastMember, EpisodeAppearance};
use crate::DbPool;

/// Ranks roles so leads come first in a cast list.
const ROLE_RANK: &str = "CASE ca.role \
     WHEN 'main' THEN 0 \
     WHEN 'supporting' THEN 1 \
     WHEN 'minor' THEN 2 \
     ELSE 3 END";

/// Provides relation lookups between characters and episodes.
pub struct AppearanceRepo;

impl AppearanceRepo {
    /// Characters appearing in an episode, leads first, then by name.
    pub async fn list_cast_for_episode(
        pool: &DbPool,
        episode_id: DbId,
    ) -> Result<Vec<CastMember>, sqlx::Error> {
        let query = format!(
            "SELECT c.id AS id, c.name AS name, c.species AS species, \
                    c.homeworld AS homeworld, c.affiliation AS affiliation, \
                    c.description AS description, c.created_at AS created_at, \
                    ca.role AS role, ca.screen_time_minutes AS screen_time_minutes
             FROM characters c
             INNER JOIN character_appearances ca ON ca.character_id = c.id
             WHERE ca.episode_id = ? AND ca.is_active = 1 AND c.is_active = 1
             ORDER BY {ROLE_RANK} ASC, c.name ASC"
        );
        sqlx::query_as::<_, CastMember>(&query)
            .bind(episode_id)
            .fetch_all(pool)
            .await
    }

    /// Episodes a character appears in, in saga order.
    pub async fn list_for_character(
        pool: &DbPool,
        character_id: DbId,
    ) -> Result<Vec<EpisodeAppearance>, sqlx::Error> {
        sqlx::query_as::<_, EpisodeAppearance>(
            "SELECT e.id AS id, e.title AS title, e.episode_number AS episode_number, \
                    e.release_year AS release_year, e.director AS director, \
                    e.description AS description, e.created_at AS created_at, \
                    ca.role AS role, ca.screen_time_minutes AS screen_time_minutes
             FROM episodes e
             INNER JOIN character_appearances ca ON ca.episode_id = e.id
             WHERE ca.character_id = ? AND ca.is_active = 1 AND e.is_active = 1
             ORDER BY e.episode_number ASC",
        )
        .bind(character_id)
        .fetch_all(pool)
        .await
    }
}
