//! Database Module
//!
//! MySQL connection pool creation and connectivity checks.

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use std::time::Duration;

use crate::config::Settings;

/// Create a MySQL connection pool.
///
/// The pool connects lazily, so the server can start while the database is
/// still unreachable; requests needing it fail until it comes up.
pub fn create_pool(url: &str, settings: &Settings) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(settings.database_max_connections)
        .acquire_timeout(Duration::from_secs(settings.database_acquire_timeout))
        .connect_lazy(url)
}

/// Run a trivial query to verify connectivity.
pub async fn ping(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
