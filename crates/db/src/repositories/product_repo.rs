//! Repository for the `products` table.
//!
//! Search is composed with [`FilterBuilder`]: every optional criterion adds
//! at most one predicate, and the page and its total are cut from the same
//! filtered set.

use archivist_core::filter::{FilterBuilder, OrderBy};
use archivist_core::pagination::{Page, PageRequest};
use archivist_core::types::DbId;

use crate::models::product::{Product, ProductDetail, ProductFilter};
use crate::query::fetch_page;
use crate::repositories::{BrandRepo, CategoryRepo, ProductImageRepo, ReviewRepo, SupplierRepo};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "p.id AS id, p.name AS name, p.slug AS slug, \
    p.sku AS sku, p.description AS description, p.price AS price, \
    p.compare_at_price AS compare_at_price, p.stock_quantity AS stock_quantity, \
    p.brand_id AS brand_id, p.supplier_id AS supplier_id, p.is_featured AS is_featured, \
    p.created_at AS created_at, p.updated_at AS updated_at";

const FROM: &str = "FROM products p";

/// Text columns matched by the `search` criterion.
const SEARCH_COLUMNS: &[&str] = &["p.name", "p.description", "p.sku"];

/// Provides listing, search and detail lookups for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Page through all active products, newest first.
    pub async fn list(pool: &DbPool, page: PageRequest) -> Result<Page<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} {FROM}
             WHERE p.is_active = 1
             ORDER BY p.created_at DESC, p.id DESC
             LIMIT ? OFFSET ?"
        );

        let rows = sqlx::query_as::<_, Product>(&query)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(pool);
        let total = Self::count(pool);

        let (rows, total) = tokio::try_join!(rows, total)?;
        Ok(Page::new(rows, page, total))
    }

    /// Page through active products matching every criterion in `filter`.
    pub async fn search(
        pool: &DbPool,
        filter: &ProductFilter,
        page: PageRequest,
    ) -> Result<Page<Product>, sqlx::Error> {
        let builder = build_product_filter(filter);
        let order = OrderBy::by(filter.sort, filter.direction).then("p.id");

        fetch_page(pool, COLUMNS, FROM, &builder, &order, page).await
    }

    /// Active featured products, newest first.
    pub async fn list_featured(pool: &DbPool, limit: i64) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} {FROM}
             WHERE p.is_active = 1 AND p.is_featured = 1
             ORDER BY p.created_at DESC, p.id DESC
             LIMIT ?"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Find an active product by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM} WHERE p.id = ? AND p.is_active = 1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an active product together with its brand, supplier,
    /// categories, images and review summary.
    ///
    /// Brand and supplier are resolved by key even when deactivated, and
    /// are `None` when the product has none assigned.
    pub async fn find_full(pool: &DbPool, id: DbId) -> Result<Option<ProductDetail>, sqlx::Error> {
        let Some(product) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let brand = async {
            match product.brand_id {
                Some(brand_id) => BrandRepo::find_by_id_any(pool, brand_id).await,
                None => Ok(None),
            }
        };
        let supplier = async {
            match product.supplier_id {
                Some(supplier_id) => SupplierRepo::find_by_id_any(pool, supplier_id).await,
                None => Ok(None),
            }
        };

        let (brand, supplier, categories, images, review_summary) = tokio::try_join!(
            brand,
            supplier,
            CategoryRepo::list_for_product(pool, id),
            ProductImageRepo::list_for_product(pool, id),
            ReviewRepo::summary_for_product(pool, id),
        )?;

        Ok(Some(ProductDetail {
            product,
            brand,
            supplier,
            categories,
            images,
            review_summary,
        }))
    }

    /// Count active products.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE is_active = 1")
            .fetch_one(pool)
            .await
    }
}

/// Translate a [`ProductFilter`] into predicates over `products p`.
fn build_product_filter(filter: &ProductFilter) -> FilterBuilder {
    let mut builder = FilterBuilder::new();
    builder
        .predicate("p.is_active = 1")
        .bind(
            "p.id IN (SELECT pc.product_id FROM product_categories pc WHERE pc.category_id = ?)",
            filter.category_id,
        )
        .eq("p.brand_id", filter.brand_id)
        .min("p.price", filter.min_price)
        .max("p.price", filter.max_price)
        .flag("p.is_featured", filter.is_featured)
        .contains_any(SEARCH_COLUMNS, filter.search.as_deref());

    match filter.in_stock {
        Some(true) => {
            builder.predicate("p.stock_quantity > 0");
        }
        Some(false) => {
            builder.predicate("p.stock_quantity = 0");
        }
        None => {}
    }

    builder
}

#[cfg(test)]
mod tests {
    use archivist_core::filter::SortDirection;

    use super::*;
    use crate::models::product::ProductSort;

    #[test]
    fn empty_filter_only_restricts_to_active() {
        let builder = build_product_filter(&ProductFilter::default());
        assert_eq!(builder.where_clause(), "WHERE p.is_active = 1");
        assert!(builder.params().is_empty());
    }

    #[test]
    fn each_criterion_adds_one_predicate() {
        let filter = ProductFilter {
            category_id: Some(4),
            brand_id: Some(2),
            min_price: Some(10.0),
            max_price: Some(50.0),
            in_stock: Some(true),
            is_featured: Some(false),
            search: Some("lamp".to_string()),
            sort: ProductSort::Price,
            direction: SortDirection::Asc,
        };
        let builder = build_product_filter(&filter);
        let clause = builder.where_clause();

        assert_eq!(clause.matches(" AND ").count(), 7);
        assert!(clause.contains("pc.category_id = ?"));
        assert!(clause.contains("p.stock_quantity > 0"));
        // category, brand, min, max, featured, three search columns
        assert_eq!(builder.params().len(), 8);
    }

    #[test]
    fn sold_out_filter_matches_zero_stock() {
        let filter = ProductFilter {
            in_stock: Some(false),
            ..ProductFilter::default()
        };
        let clause = build_product_filter(&filter).where_clause();
        assert!(clause.ends_with("p.stock_quantity = 0"));
    }
}
