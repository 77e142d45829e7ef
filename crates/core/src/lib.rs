//! Domain helpers shared by the repository and HTTP layers.
//!
//! Nothing in this crate performs I/O: it composes SQL fragments, computes
//! pagination metadata and validates request parameters so the same rules
//! apply to every endpoint of both API variants.

pub mod error;
pub mod filter;
pub mod pagination;
pub mod types;
pub mod validation;
