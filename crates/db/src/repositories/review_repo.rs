//! Repository for the `reviews` table.

use archivist_core::filter::{FilterBuilder, OrderBy, SortDirection};
use archivist_core::pagination::{Page, PageRequest};
use archivist_core::types::DbId;

use crate::models::review::{Review, ReviewSummary};
use crate::query::fetch_page;
use crate::DbPool;

const COLUMNS: &str = "r.id AS id, r.product_id AS product_id, r.user_id AS user_id, \
    u.username AS username, r.rating AS rating, r.title AS title, r.body AS body, \
    r.is_verified_purchase AS is_verified_purchase, r.created_at AS created_at";

const FROM: &str = "FROM reviews r LEFT JOIN users u ON u.id = r.user_id";

/// Provides review listing and rating aggregation.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Page through a product's active reviews, newest first.
    pub async fn list_for_product(
        pool: &DbPool,
        product_id: DbId,
        page: PageRequest,
    ) -> Result<Page<Review>, sqlx::Error> {
        let mut filter = FilterBuilder::new();
        filter
            .predicate("r.is_active = 1")
            .eq("r.product_id", Some(product_id));
        let order = OrderBy::new("r.created_at", SortDirection::Desc).then("r.id");

        fetch_page(pool, COLUMNS, FROM, &filter, &order, page).await
    }

    /// Count and mean rating of a product's active reviews.
    pub async fn summary_for_product(
        pool: &DbPool,
        product_id: DbId,
    ) -> Result<ReviewSummary, sqlx::Error> {
        sqlx::query_as::<_, ReviewSummary>(
            "SELECT COUNT(*) AS count, AVG(rating) AS average_rating
             FROM reviews
             WHERE product_id = ? AND is_active = 1",
        )
        .bind(product_id)
        .fetch_one(pool)
        .await
    }
}
