//! Application state shared across all request handlers.
//!
//! `AppState` is built once at startup and cloned into every handler through
//! Axum's state extraction. It carries the storage handle explicitly instead of
//! relying on a process-wide pool.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// Cloning is cheap: `DatabaseConnection` is a pool handle and clones share the
/// same bounded set of connections.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
