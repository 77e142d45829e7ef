//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&DbPool` as the first argument. By-id lookups return
//! `Ok(None)` when no row matches; list queries return an empty `Vec`.
//! Persistence failures are returned unchanged as `sqlx::Error`.

pub mod appearance_repo;
pub mod brand_repo;
pub mod category_repo;
pub mod character_repo;
pub mod episode_repo;
pub mod order_item_repo;
pub mod order_repo;
pub mod product_image_repo;
pub mod product_repo;
pub mod review_repo;
pub mod supplier_repo;
pub mod user_repo;

pub use appearance_repo::AppearanceRepo;
pub use brand_repo::BrandRepo;
pub use category_repo::CategoryRepo;
pub use character_repo::CharacterRepo;
pub use episode_repo::EpisodeRepo;
pub use order_item_repo::OrderItemRepo;
pub use order_repo::OrderRepo;
pub use product_image_repo::ProductImageRepo;
pub use product_repo::ProductRepo;
pub use review_repo::ReviewRepo;
pub use supplier_repo::SupplierRepo;
pub use user_repo::UserRepo;
