use std::sync::Arc;

use crate::config::{ApiVariant, ServerConfig};

/// Shared application state available to all handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: archivist_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Which API surface this process serves.
    pub variant: ApiVariant,
}
