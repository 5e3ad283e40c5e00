use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: shareit_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
