//! Repository for the `product_images` table.

use archivist_core::types::DbId;

use crate::models::product_image::ProductImage;
use crate::DbPool;

pub struct ProductImageRepo;

impl ProductImageRepo {
    /// Active images of a product: the primary image first, then by
    /// `sort_order`, ties broken by ID.
    pub async fn list_for_product(
        pool: &DbPool,
        product_id: DbId,
    ) -> Result<Vec<ProductImage>, sqlx::Error> {
        sqlx::query_as::<_, ProductImage>(
            "SELECT id, product_id, url, alt_text, sort_order, is_primary
             FROM product_images
             WHERE product_id = ? AND is_active = 1
             ORDER BY is_primary DESC, sort_order ASC, id ASC",
        )
        .bind(product_id)
        .fetch_all(pool)
        .await
    }
}
