//! Product entity model, search filter and the full detail aggregate.

use archivist_core::filter::{SortColumn, SortDirection};
use archivist_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::brand::Brand;
use crate::models::category::Category;
use crate::models::product_image::ProductImage;
use crate::models::review::ReviewSummary;
use crate::models::supplier::Supplier;

/// An active row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub sku: String,
    pub description: Option<String>,
    pub price: f64,
    pub compare_at_price: Option<f64>,
    pub stock_quantity: i64,
    pub brand_id: Option<DbId>,
    pub supplier_id: Option<DbId>,
    pub is_featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// `GET /api/products/{id}/full` payload.
///
/// `brand` and `supplier` are `null` when unassigned.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    pub brand: Option<Brand>,
    pub supplier: Option<Supplier>,
    pub categories: Vec<Category>,
    pub images: Vec<ProductImage>,
    pub review_summary: ReviewSummary,
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Sortable product columns accepted in `sort_by`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductSort {
    Name,
    Price,
    #[default]
    CreatedAt,
    StockQuantity,
    Rating,
}

impl SortColumn for ProductSort {
    const ALLOWED: &'static [&'static str] =
        &["name", "price", "created_at", "stock_quantity", "rating"];

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(ProductSort::Name),
            "price" => Some(ProductSort::Price),
            "created_at" => Some(ProductSort::CreatedAt),
            "stock_quantity" => Some(ProductSort::StockQuantity),
            "rating" => Some(ProductSort::Rating),
            _ => None,
        }
    }

    fn column(self) -> &'static str {
        match self {
            ProductSort::Name => "p.name",
            ProductSort::Price => "p.price",
            ProductSort::CreatedAt => "p.created_at",
            ProductSort::StockQuantity => "p.stock_quantity",
            ProductSort::Rating => {
                "(SELECT AVG(r.rating) FROM reviews r \
                 WHERE r.product_id = p.id AND r.is_active = 1)"
            }
        }
    }
}

/// Optional criteria for `ProductRepo::search`. Every `None` field imposes
/// no constraint; the default value matches every active product.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category_id: Option<DbId>,
    pub brand_id: Option<DbId>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// `true`: stock above zero. `false`: sold out.
    pub in_stock: Option<bool>,
    pub is_featured: Option<bool>,
    /// Case-insensitive substring of name, description or SKU.
    pub search: Option<String>,
    pub sort: ProductSort,
    pub direction: SortDirection,
}
