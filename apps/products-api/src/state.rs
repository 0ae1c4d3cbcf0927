//! Application state management.
//!
//! The shared state handed to request handlers. Cloning is cheap: the
//! database connection is a pooled handle.

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: database::postgres::DatabaseConnection,
}
