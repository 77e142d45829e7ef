//! Category entity model.

use archivist_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An active row from the `categories` table. Categories form a tree
/// through `parent_id`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub parent_id: Option<DbId>,
    pub sort_order: i64,
    pub created_at: Timestamp,
}
