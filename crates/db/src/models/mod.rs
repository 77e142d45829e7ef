//! Row models and response aggregates.
//!
//! Lore: [`episode`], [`character`], [`appearance`].
//! Catalog: everything else.

pub mod appearance;
pub mod brand;
pub mod category;
pub mod character;
pub mod episode;
pub mod order;
pub mod product;
pub mod product_image;
pub mod review;
pub mod supplier;
pub mod user;
