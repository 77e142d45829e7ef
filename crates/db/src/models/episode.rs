//! Episode entity model.

use archivist_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An active row from the `episodes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Episode {
    pub id: DbId,
    pub title: String,
    pub episode_number: i64,
    pub release_year: i64,
    pub director: String,
    pub description: String,
    pub created_at: Timestamp,
}
