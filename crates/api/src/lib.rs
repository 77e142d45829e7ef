//! HTTP layer shared by the `lore-api` and `catalog-api` binaries.
//!
//! Exposes config, state, error handling and the router builder so the
//! binaries and the integration tests assemble the exact same application.

pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod response;
pub mod router;
pub mod routes;
pub mod server;
pub mod state;
