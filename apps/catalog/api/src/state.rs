//! Shared application state.

use database::postgres::DatabaseConnection;

/// Cloned into the readiness handler and the shutdown cleanup task.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// PostgreSQL pool; absent when running on the in-memory repository
    pub db: Option<DatabaseConnection>,
}
