//! # Skripsi Config
//!
//! Configuration types for the essay scoring API.
//!
//! Every structure is loaded from environment variables once at startup and
//! then passed explicitly to the components that need it:
//!
//! - [`jwt`]: token signing key and lifetime
//! - [`cors`]: allowed cross-origin callers
//! - [`database`]: Postgres connection pool and query timeouts
//! - [`server`]: listen address and request timeout
//! - [`logging`]: log format and optional log directory
//!
//! # Example
//!
//! ```ignore
//! use skripsi_config::AppConfig;
//!
//! let config = AppConfig::from_env();
//! println!("listening on {}", config.server.bind_address());
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod logging;
pub mod server;

use std::env;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use logging::{LogConfig, LogFormat};
pub use server::ServerConfig;

/// Deployment environment, read from `APP_ENV`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn from_env() -> Self {
        env::var("APP_ENV")
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// All runtime configuration, constructed once in `main`.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: Environment,
    pub jwt: JwtConfig,
    pub cors: CorsConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub logging: LogConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            jwt: JwtConfig::from_env(environment),
            cors: CorsConfig::from_env(),
            database: DatabaseConfig::from_env(),
            server: ServerConfig::from_env(),
            logging: LogConfig::from_env(),
        }
    }
}

pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
