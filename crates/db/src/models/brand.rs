//! Brand entity model.

use archivist_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `brands` table.
///
/// `is_active` is exposed because a product may still reference a retired
/// brand, which is returned as-is by the product detail view.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Brand {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub website_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
}
