use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: both fields are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The watchlist collection and its backing file.
    pub pool: watchlist_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
