pub mod brand;
pub mod category;
pub mod character;
pub mod episode;
pub mod health;
pub mod meta;
pub mod order;
pub mod product;
pub mod supplier;
pub mod user;
