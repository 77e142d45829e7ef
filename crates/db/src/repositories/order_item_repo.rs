//! Repository for the `order_items` table.

use archivist_core::types::DbId;

use crate::models::order::OrderItem;
use crate::DbPool;

pub struct OrderItemRepo;

impl OrderItemRepo {
    /// Active lines of an order in entry order.
    ///
    /// Values come from the snapshot columns; the referenced product is
    /// never consulted.
    pub async fn list_for_order(
        pool: &DbPool,
        order_id: DbId,
    ) -> Result<Vec<OrderItem>, sqlx::Error> {
        sqlx::query_as::<_, OrderItem>(
            "SELECT id, order_id, product_id, product_name, product_sku,
                    unit_price, quantity, total_price
             FROM order_items
             WHERE order_id = ? AND is_active = 1
             ORDER BY id ASC",
        )
        .bind(order_id)
        .fetch_all(pool)
        .await
    }
}
