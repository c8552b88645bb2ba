//! User domain models and DTOs.

use serde::{Deserialize, Serialize};
use skripsi_core::Role;
use skripsi_core::serde::deserialize_optional_trimmed;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validation::{not_blank, not_email_like};

/// A user as seen by callers.
///
/// Deliberately has no password field: the stored hash is returned by the
/// store as a separate value and never enters this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub nama_lengkap: String,
    pub username: Option<String>,
    pub email: String,
    pub peran: Role,
}

/// Request body for student self-registration and for teacher creation.
///
/// The role is never taken from the body; each endpoint pins it.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(custom(function = "not_blank", message = "nama_lengkap is required"))]
    #[schema(example = "Ayu Lestari")]
    pub nama_lengkap: String,
    /// Optional; blank values are treated as absent.
    #[serde(default, deserialize_with = "deserialize_optional_trimmed")]
    #[validate(
        length(max = 32, message = "username must be at most 32 characters"),
        custom(function = "not_email_like", message = "username must not contain '@'")
    )]
    #[schema(example = "ayu01")]
    pub username: Option<String>,
    #[validate(email(message = "email must be a valid email address"))]
    #[schema(example = "ayu@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Input accepted by the credential store. The password is still plaintext
/// here; the store hashes it before persisting.
#[derive(Clone)]
pub struct NewUser {
    pub nama_lengkap: String,
    pub username: Option<String>,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("nama_lengkap", &self.nama_lengkap)
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl From<CreateUserDto> for NewUser {
    fn from(dto: CreateUserDto) -> Self {
        Self {
            nama_lengkap: dto.nama_lengkap.trim().to_string(),
            username: dto.username,
            email: dto.email.trim().to_string(),
            password: dto.password,
        }
    }
}
