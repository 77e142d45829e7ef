//! Repository for the `users` table.

use archivist_core::types::DbId;

use crate::models::user::{User, UserSummary};
use crate::DbPool;

const COLUMNS: &str = "id, username, email, first_name, last_name, created_at";

pub struct UserRepo;

impl UserRepo {
    /// List active users by username.
    pub async fn list(pool: &DbPool) -> Result<Vec<User>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM users WHERE is_active = 1 ORDER BY username ASC");
        sqlx::query_as::<_, User>(&query).fetch_all(pool).await
    }

    /// Find an active user by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = ? AND is_active = 1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Summary of any user, active or not, for embedding in an order.
    pub async fn find_summary_any(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<UserSummary>, sqlx::Error> {
        sqlx::query_as::<_, UserSummary>(
            "SELECT id, username, first_name, last_name, is_active FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}
