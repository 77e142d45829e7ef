//! Character entity model.

use archivist_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An active row from the `characters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub species: String,
    pub homeworld: String,
    pub affiliation: String,
    pub description: String,
    pub created_at: Timestamp,
}
