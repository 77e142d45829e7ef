//! Repository for the `episodes` table.

use archivist_core::types::DbId;

use crate::models::appearance::EpisodeWithCast;
use crate::models::episode::Episode;
use crate::repositories::AppearanceRepo;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, episode_number, release_year, director, description, created_at";

/// Provides read operations for episodes.
pub struct EpisodeRepo;

impl EpisodeRepo {
    /// List active episodes in saga order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Episode>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM episodes
             WHERE is_active = 1
             ORDER BY episode_number ASC"
        );
        sqlx::query_as::<_, Episode>(&query).fetch_all(pool).await
    }

    /// Find an active episode by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Episode>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM episodes WHERE id = ? AND is_active = 1");
        sqlx::query_as::<_, Episode>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an episode together with its cast.
    ///
    /// The episode and the cast are fetched concurrently; `None` when the
    /// episode does not exist or is inactive.
    pub async fn find_with_cast(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<EpisodeWithCast>, sqlx::Error> {
        let (episode, characters) = tokio::try_join!(
            Self::find_by_id(pool, id),
            AppearanceRepo::list_cast_for_episode(pool, id),
        )?;

        Ok(episode.map(|episode| EpisodeWithCast {
            episode,
            characters,
        }))
    }

    /// Number of active episodes.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM episodes WHERE is_active = 1")
            .fetch_one(pool)
            .await
    }
}
