use crate::{Environment, env_or};
use std::env;

/// Signing key used when `JWT_SECRET` is unset outside production.
pub const DEVELOPMENT_SECRET: &str = "development-only-secret-do-not-deploy";

pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 24 * 60 * 60;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// `None` means no key is available and every token must be rejected.
    pub secret: Option<String>,
    pub token_ttl_seconds: i64,
    /// Set when `secret` is the built-in development key.
    pub using_development_secret: bool,
}

impl JwtConfig {
    pub fn from_env(environment: Environment) -> Self {
        let configured = env::var("JWT_SECRET").ok();
        let ttl = env_or("JWT_TTL_SECONDS", DEFAULT_TOKEN_TTL_SECONDS);
        Self::resolve(configured, ttl, environment)
    }

    pub fn resolve(configured: Option<String>, ttl: i64, environment: Environment) -> Self {
        let configured = configured
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let (secret, using_development_secret) = match configured {
            Some(secret) => (Some(secret), false),
            None if environment.is_production() => (None, false),
            None => (Some(DEVELOPMENT_SECRET.to_string()), true),
        };

        Self {
            secret,
            token_ttl_seconds: if ttl > 0 { ttl } else { DEFAULT_TOKEN_TTL_SECONDS },
            using_development_secret,
        }
    }
}
