//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

use crate::server::metrics::Metrics;

/// Shared resources cloned into every handler through Axum's state extraction.
///
/// Both fields are cheap to clone: the connection is a pool handle and the metric
/// collectors are reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Prometheus registry and HTTP request series.
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(db: DatabaseConnection, metrics: Metrics) -> Self {
        Self { db, metrics }
    }
}
