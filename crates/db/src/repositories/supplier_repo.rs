//! Repository for the `suppliers` table.

use archivist_core::types::DbId;

use crate::models::supplier::Supplier;
use crate::DbPool;

const COLUMNS: &str = "id, name, contact_email, contact_phone, country, is_active, created_at";

pub struct SupplierRepo;

impl SupplierRepo {
    /// List active suppliers by name.
    pub async fn list(pool: &DbPool) -> Result<Vec<Supplier>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM suppliers WHERE is_active = 1 ORDER BY name ASC");
        sqlx::query_as::<_, Supplier>(&query).fetch_all(pool).await
    }

    /// Find an active supplier by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Supplier>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM suppliers WHERE id = ? AND is_active = 1");
        sqlx::query_as::<_, Supplier>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a supplier by its ID regardless of its active flag.
    pub async fn find_by_id_any(pool: &DbPool, id: DbId) -> Result<Option<Supplier>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM suppliers WHERE id = ?");
        sqlx::query_as::<_, Supplier>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
