use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use skripsi_core::AppError;
use skripsi_models::{CreateUserDto, CreatedUserResponse, LoginRequest, LoginResponse, MessageResponse};
use tracing::instrument;

use super::service::AuthService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a new student account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Student registered", body = CreatedUserResponse),
        (status = 400, description = "Validation error", body = MessageResponse),
        (status = 409, description = "Username or email already in use", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<(StatusCode, Json<CreatedUserResponse>), AppError> {
    let user_id = AuthService::register_student(state.store.as_ref(), dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedUserResponse {
            message: "User registered successfully".to_string(),
            user_id,
        }),
    ))
}

/// Log in with email or username and receive a bearer token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Validation error", body = MessageResponse),
        (status = 401, description = "Invalid credentials", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login(state.store.as_ref(), &state.tokens, dto).await?;
    Ok(Json(response))
}
