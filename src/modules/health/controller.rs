use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;
use skripsi_models::MessageResponse;
use tracing::warn;
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

/// Public greeting, useful as a smoke test
#[utoipa::path(
    get,
    path = "/api/hello",
    responses(
        (status = 200, description = "Greeting", body = MessageResponse)
    ),
    tag = "Health"
)]
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello from the essay scoring backend!"))
}

/// Liveness of the service and its database
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service and database reachable", body = HealthResponse),
        (status = 503, description = "Database unreachable", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok".to_string(),
            }),
        ),
        Err(e) => {
            warn!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable".to_string(),
                }),
            )
        }
    }
}
