//! Repository for the `brands` table.

use archivist_core::types::DbId;

use crate::models::brand::Brand;
use crate::DbPool;

const COLUMNS: &str = "id, name, slug, description, website_url, is_active, created_at";

pub struct BrandRepo;

impl BrandRepo {
    /// List active brands by name.
    pub async fn list(pool: &DbPool) -> Result<Vec<Brand>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM brands WHERE is_active = 1 ORDER BY name ASC");
        sqlx::query_as::<_, Brand>(&query).fetch_all(pool).await
    }

    /// Find an active brand by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Brand>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM brands WHERE id = ? AND is_active = 1");
        sqlx::query_as::<_, Brand>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a brand by its ID regardless of its active flag.
    pub async fn find_by_id_any(pool: &DbPool, id: DbId) -> Result<Option<Brand>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM brands WHERE id = ?");
        sqlx::query_as::<_, Brand>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
