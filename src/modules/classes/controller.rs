use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use skripsi_core::AppError;
use skripsi_models::{Class, CreateClassDto, MessageResponse};
use tracing::instrument;

use super::service::ClassService;
use crate::middleware::role::RequireTeacherOrAdmin;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Create a class owned by the caller
///
/// Any `guru_id` in the body is ignored.
#[utoipa::path(
    post,
    path = "/api/classes",
    request_body = CreateClassDto,
    responses(
        (status = 201, description = "Class created", body = Class),
        (status = 400, description = "Validation error", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "Caller is not a teacher or superadmin", body = MessageResponse)
    ),
    tag = "Classes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto, auth_user), fields(guru.id = %auth_user.user_id()))]
pub async fn create_class(
    RequireTeacherOrAdmin(auth_user): RequireTeacherOrAdmin,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateClassDto>,
) -> Result<(StatusCode, Json<Class>), AppError> {
    let class = ClassService::create_class(state.store.as_ref(), auth_user.user_id(), dto).await?;
    Ok((StatusCode::CREATED, Json(class)))
}

/// List the caller's classes, newest first
#[utoipa::path(
    get,
    path = "/api/classes",
    responses(
        (status = 200, description = "Classes owned by the caller", body = Vec<Class>),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "Caller is not a teacher or superadmin", body = MessageResponse)
    ),
    tag = "Classes",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(guru.id = %auth_user.user_id()))]
pub async fn list_classes(
    RequireTeacherOrAdmin(auth_user): RequireTeacherOrAdmin,
    State(state): State<AppState>,
) -> Result<Json<Vec<Class>>, AppError> {
    let classes = ClassService::list_classes(state.store.as_ref(), auth_user.user_id()).await?;
    Ok(Json(classes))
}
