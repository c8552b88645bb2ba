//! # Skripsi DB
//!
//! Database pool initialization for the essay scoring API.
//!
//! The pool is built from a [`DatabaseConfig`] with a bounded acquire timeout,
//! so no request waits indefinitely for a connection.
//!
//! # Example
//!
//! ```ignore
//! use skripsi_config::DatabaseConfig;
//! use skripsi_db::init_db_pool;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), skripsi_db::DbInitError> {
//!     let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//!     // Use pool for database operations
//!     Ok(())
//! }
//! ```

use skripsi_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

// Re-export PgPool for convenience
pub use sqlx::PgPool;

#[derive(Debug, thiserror::Error)]
pub enum DbInitError {
    #[error("DATABASE_URL must be set")]
    MissingUrl,
    #[error("failed to connect to database: {0}")]
    Connect(#[from] sqlx::Error),
}

/// Initializes a PostgreSQL connection pool.
///
/// Reads the connection string from the config; the pool is cheaply cloneable
/// and is shared across all request tasks.
///
/// # Errors
///
/// Returns [`DbInitError::MissingUrl`] when no URL is configured and
/// [`DbInitError::Connect`] when the first connection cannot be established
/// within the acquire timeout.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, DbInitError> {
    let url = config.url.as_deref().ok_or(DbInitError::MissingUrl)?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(url)
        .await?;

    info!(
        max_connections = config.max_connections,
        acquire_timeout_secs = config.acquire_timeout.as_secs(),
        "Database pool initialized"
    );

    Ok(pool)
}
