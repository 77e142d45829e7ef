//! Product image model.

use archivist_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductImage {
    pub id: DbId,
    pub product_id: DbId,
    pub url: String,
    pub alt_text: Option<String>,
    pub sort_order: i64,
    pub is_primary: bool,
}
