//! Repository for the `orders` table.

use archivist_core::types::DbId;

use crate::models::order::{Order, OrderDetail, OrderSummary};
use crate::repositories::{OrderItemRepo, UserRepo};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "o.id AS id, o.user_id AS user_id, o.order_number AS order_number, \
    o.status AS status, o.subtotal AS subtotal, o.tax_amount AS tax_amount, \
    o.shipping_amount AS shipping_amount, o.total_amount AS total_amount, \
    o.shipping_address AS shipping_address, o.created_at AS created_at";

/// Provides order history and order detail lookups.
pub struct OrderRepo;

impl OrderRepo {
    /// Active orders placed by a user, newest first, with their line count.
    pub async fn list_for_user(
        pool: &DbPool,
        user_id: DbId,
    ) -> Result<Vec<OrderSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS},
                    (SELECT COUNT(*) FROM order_items oi
                     WHERE oi.order_id = o.id AND oi.is_active = 1) AS item_count
             FROM orders o
             WHERE o.user_id = ? AND o.is_active = 1
             ORDER BY o.created_at DESC, o.id DESC"
        );
        sqlx::query_as::<_, OrderSummary>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find an active order by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders o WHERE o.id = ? AND o.is_active = 1");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active order with its customer and line items.
    pub async fn find_detail(pool: &DbPool, id: DbId) -> Result<Option<OrderDetail>, sqlx::Error> {
        let Some(order) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let (user, items) = tokio::try_join!(
            UserRepo::find_summary_any(pool, order.user_id),
            OrderItemRepo::list_for_order(pool, id),
        )?;

        Ok(Some(OrderDetail { order, user, items }))
    }
}
