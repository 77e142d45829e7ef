//! Review model and per-product rating summary.

use archivist_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An active review together with its author's username.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub product_id: DbId,
    pub user_id: DbId,
    /// `None` only if the author row no longer exists.
    pub username: Option<String>,
    pub rating: i64,
    pub title: Option<String>,
    pub body: Option<String>,
    pub is_verified_purchase: bool,
    pub created_at: Timestamp,
}

/// Aggregate over a product's active reviews.
#[derive(Debug, Clone, Copy, PartialEq, FromRow, Serialize)]
pub struct ReviewSummary {
    pub count: i64,
    /// `None` when the product has no active reviews.
    pub average_rating: Option<f64>,
}
