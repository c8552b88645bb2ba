use anyhow::anyhow;
use skripsi_core::{AppError, Role};
use skripsi_models::{CreateUserDto, User};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::modules::auth::service::AuthService;
use crate::store::Store;

pub const TEACHER_NOT_FOUND_MESSAGE: &str = "Teacher not found";

pub struct TeacherService;

impl TeacherService {
    #[instrument(skip(store, dto))]
    pub async fn create_teacher(store: &dyn Store, dto: CreateUserDto) -> Result<Uuid, AppError> {
        AuthService::create_account(store, dto, Role::Teacher).await
    }

    #[instrument(skip(store))]
    pub async fn list_teachers(store: &dyn Store) -> Result<Vec<User>, AppError> {
        store
            .get_teachers()
            .await
            .map_err(|e| e.into_app_error())
    }

    /// Deletes a teacher. Ids of other roles, unknown ids and malformed ids
    /// are all reported as not found.
    #[instrument(skip(store))]
    pub async fn delete_teacher(store: &dyn Store, id: &str) -> Result<(), AppError> {
        let removed = store
            .delete_user_by_id(id, Role::Teacher)
            .await
            .map_err(|e| e.into_app_error())?;

        if removed == 0 {
            return Err(AppError::not_found(anyhow!(TEACHER_NOT_FOUND_MESSAGE)));
        }

        info!(teacher.id = %id, "Teacher deleted");
        Ok(())
    }
}
