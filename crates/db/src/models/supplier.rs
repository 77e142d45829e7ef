//! Supplier entity model.

use archivist_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `suppliers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Supplier {
    pub id: DbId,
    pub name: String,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub country: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
}
