use std::sync::Arc;

use roster_store::Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`. Cheaply cloneable; the store and config live behind
/// `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The canonical collections.
    pub store: Arc<Store>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
