use skripsi_core::AppError;
use skripsi_models::{Class, CreateClassDto};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::store::Store;

pub struct ClassService;

impl ClassService {
    /// `guru_id` always comes from the caller's verified claims.
    #[instrument(skip(store, dto))]
    pub async fn create_class(
        store: &dyn Store,
        guru_id: Uuid,
        dto: CreateClassDto,
    ) -> Result<Class, AppError> {
        let class = store
            .create_class(guru_id, dto)
            .await
            .map_err(|e| e.into_app_error())?;

        info!(class.id = %class.id, "Class created");
        Ok(class)
    }

    #[instrument(skip(store))]
    pub async fn list_classes(store: &dyn Store, guru_id: Uuid) -> Result<Vec<Class>, AppError> {
        store
            .get_classes_by_teacher_id(guru_id)
            .await
            .map_err(|e| e.into_app_error())
    }
}
