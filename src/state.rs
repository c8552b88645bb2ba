use std::sync::Arc;
use std::time::Duration;

use skripsi_auth::TokenService;
use skripsi_config::{AppConfig, CorsConfig};

use crate::store::Store;

/// Everything a request handler may touch, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub tokens: Arc<TokenService>,
    pub cors_config: CorsConfig,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(
        store: Arc<dyn Store>,
        tokens: TokenService,
        cors_config: CorsConfig,
        request_timeout: Duration,
    ) -> Self {
        Self {
            store,
            tokens: Arc::new(tokens),
            cors_config,
            request_timeout,
        }
    }

    pub fn from_config(store: Arc<dyn Store>, config: &AppConfig) -> Self {
        Self::new(
            store,
            TokenService::from_config(&config.jwt),
            config.cors.clone(),
            config.server.request_timeout,
        )
    }
}
