use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference-counted and the config is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. The only store handle; passed explicitly
    /// into every repository and view call.
    pub pool: fyyur_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
