//! Postgres connection settings.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: connection string (required by the server and CLI)
//! - `DATABASE_MAX_CONNECTIONS`: pool size, default 10
//! - `DATABASE_ACQUIRE_TIMEOUT_SECS`: wait for a pooled connection, default 5
//! - `DATABASE_QUERY_TIMEOUT_SECS`: upper bound for a single store call, default 10

use crate::env_or;
use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub query_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
            query_timeout: Duration::from_secs(10),
        }
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: env::var("DATABASE_URL").ok().filter(|s| !s.trim().is_empty()),
            max_connections: env_or("DATABASE_MAX_CONNECTIONS", defaults.max_connections),
            acquire_timeout: Duration::from_secs(env_or(
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout.as_secs(),
            )),
            query_timeout: Duration::from_secs(env_or(
                "DATABASE_QUERY_TIMEOUT_SECS",
                defaults.query_timeout.as_secs(),
            )),
        }
    }
}
