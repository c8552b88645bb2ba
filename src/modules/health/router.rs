use axum::{Router, routing::get};

use super::controller::{health, hello};
use crate::state::AppState;

pub fn init_health_router() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello))
        .route("/health", get(health))
}
