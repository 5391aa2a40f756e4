use std::sync::Arc;

use evermore_db::store::PgAuthStore;

use crate::auth::session::SessionManager;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: evermore_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// The admin session manager over the Postgres auth store.
    pub sessions: Arc<SessionManager<PgAuthStore>>,
}

impl AppState {
    /// Assemble the state from a pool and configuration.
    pub fn new(pool: evermore_db::DbPool, config: ServerConfig) -> Self {
        let store = Arc::new(PgAuthStore::new(pool.clone()));
        let sessions = Arc::new(SessionManager::new(store, config.jwt.clone()));
        Self {
            pool,
            config: Arc::new(config),
            sessions,
        }
    }
}
