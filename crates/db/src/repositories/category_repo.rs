//! Repository for the `categories` table and product classification.

use archivist_core::types::DbId;

use crate::models::category::Category;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "c.id AS id, c.name AS name, c.slug AS slug, \
    c.description AS description, c.parent_id AS parent_id, c.sort_order AS sort_order, \
    c.created_at AS created_at";

/// Provides read operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List active categories by display order, then name.
    pub async fn list(pool: &DbPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories c
             WHERE c.is_active = 1
             ORDER BY c.sort_order ASC, c.name ASC"
        );
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Find an active category by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM categories c WHERE c.id = ? AND c.is_active = 1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Direct active children of a category.
    pub async fn list_children(
        pool: &DbPool,
        parent_id: DbId,
    ) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories c
             WHERE c.parent_id = ? AND c.is_active = 1
             ORDER BY c.sort_order ASC, c.name ASC"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(parent_id)
            .fetch_all(pool)
            .await
    }

    /// Active categories a product is filed under.
    pub async fn list_for_product(
        pool: &DbPool,
        product_id: DbId,
    ) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories c
             INNER JOIN product_categories pc ON pc.category_id = c.id
             WHERE pc.product_id = ? AND c.is_active = 1
             ORDER BY c.sort_order ASC, c.name ASC"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(product_id)
            .fetch_all(pool)
            .await
    }
}
