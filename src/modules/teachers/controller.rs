use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use skripsi_core::AppError;
use skripsi_models::{CreateUserDto, CreatedUserResponse, MessageResponse, User};
use tracing::instrument;

use super::service::TeacherService;
use crate::middleware::role::RequireAdmin;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Create a teacher account (superadmin only)
#[utoipa::path(
    post,
    path = "/api/admin/teachers",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Teacher created", body = CreatedUserResponse),
        (status = 400, description = "Validation error", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "Caller is not a superadmin", body = MessageResponse),
        (status = 409, description = "Username or email already in use", body = MessageResponse)
    ),
    tag = "Teachers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto, admin), fields(admin.id = %admin.user_id()))]
pub async fn create_teacher(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<(StatusCode, Json<CreatedUserResponse>), AppError> {
    let user_id = TeacherService::create_teacher(state.store.as_ref(), dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedUserResponse {
            message: "Teacher created successfully".to_string(),
            user_id,
        }),
    ))
}

/// List every teacher (superadmin only)
#[utoipa::path(
    get,
    path = "/api/admin/teachers",
    responses(
        (status = 200, description = "All teachers", body = Vec<User>),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "Caller is not a superadmin", body = MessageResponse)
    ),
    tag = "Teachers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin))]
pub async fn list_teachers(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, AppError> {
    let teachers = TeacherService::list_teachers(state.store.as_ref()).await?;
    Ok(Json(teachers))
}

/// Delete a teacher by id (superadmin only)
#[utoipa::path(
    delete,
    path = "/api/admin/teachers/{id}",
    params(
        ("id" = String, Path, description = "Teacher id")
    ),
    responses(
        (status = 200, description = "Teacher deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "Caller is not a superadmin", body = MessageResponse),
        (status = 404, description = "No teacher with this id", body = MessageResponse)
    ),
    tag = "Teachers",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _admin))]
pub async fn delete_teacher(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    TeacherService::delete_teacher(state.store.as_ref(), &id).await?;
    Ok(Json(MessageResponse::new("Teacher deleted successfully")))
}
