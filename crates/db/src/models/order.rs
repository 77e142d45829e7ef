//! Order and order item models.

use archivist_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::user::UserSummary;

/// Lifecycle state stored in `orders.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

/// An active row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub user_id: DbId,
    pub order_number: String,
    pub status: OrderStatus,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub shipping_amount: f64,
    pub total_amount: f64,
    pub shipping_address: Option<String>,
    pub created_at: Timestamp,
}

/// An order as listed under a user, with its line count.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderSummary {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub order: Order,
    pub item_count: i64,
}

/// A line of an order.
///
/// Name, SKU and unit price are the values captured when the order was
/// placed; `product_id` is kept only as a reference and may be `None`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OrderItem {
    pub id: DbId,
    pub order_id: DbId,
    pub product_id: Option<DbId>,
    pub product_name: String,
    pub product_sku: String,
    pub unit_price: f64,
    pub quantity: i64,
    pub total_price: f64,
}

/// `GET /api/orders/{id}` payload.
#[derive(Debug, Clone, Serialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub user: Option<UserSummary>,
    pub items: Vec<OrderItem>,
}
