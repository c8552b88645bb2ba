use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skripsi_core::serde::deserialize_optional_trimmed;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validation::not_blank;

/// A class owned by exactly one teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Class {
    pub id: Uuid,
    pub guru_id: Uuid,
    pub nama_kelas: String,
    pub deskripsi: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a class.
///
/// There is no `guru_id` field: the owner always comes from the caller's
/// token, and any `guru_id` sent in the body is ignored.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateClassDto {
    #[validate(custom(function = "not_blank", message = "nama_kelas is required"))]
    #[schema(example = "XII IPA 1")]
    pub nama_kelas: String,
    #[serde(default, deserialize_with = "deserialize_optional_trimmed")]
    pub deskripsi: Option<String>,
}
