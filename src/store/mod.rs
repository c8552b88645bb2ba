//! Persistence abstraction.
//!
//! Handlers and services talk to a [`Store`] and never to SQL directly. The
//! production implementation is [`PgStore`]; [`MemoryStore`] offers the same
//! semantics in process and backs the HTTP test-suite.
//!
//! Uniqueness and row-level consistency are delegated to the backing store:
//! a duplicate username or email surfaces as [`StoreError::Conflict`] naming
//! the field that collided.

pub mod postgres;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

use std::fmt;

use anyhow::anyhow;
use async_trait::async_trait;
use skripsi_core::{AppError, Role};
use skripsi_models::{Class, CreateClassDto, NewUser, User};
use uuid::Uuid;

pub use postgres::PgStore;

#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryStore;

/// The unique column that a conflicting insert collided with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Username,
    Email,
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniqueField::Username => f.write_str("username"),
            UniqueField::Email => f.write_str("email"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0} already in use")]
    Conflict(UniqueField),
    #[error("record not found")]
    NotFound,
    #[error("store call exceeded its timeout")]
    Timeout,
    #[error("failed to hash password: {0}")]
    Hashing(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Maps a store failure onto the HTTP error taxonomy.
    ///
    /// Callers that can observe `NotFound` (lookups, deletes) handle it with
    /// their own message before falling back here, so a stray one is a 500.
    pub fn into_app_error(self) -> AppError {
        match self {
            StoreError::Conflict(UniqueField::Username) => {
                AppError::conflict(anyhow!("Username already taken"))
            }
            StoreError::Conflict(UniqueField::Email) => {
                AppError::conflict(anyhow!("Email already registered"))
            }
            other => AppError::internal(other),
        }
    }
}

/// Credential store: user records and their password hashes.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Hashes the password, persists the user with `role` and returns the new id.
    async fn create_user(&self, user: NewUser, role: Role) -> Result<Uuid, StoreError>;

    /// Looks a user up by email or username. The stored hash is returned
    /// alongside the record, never inside it.
    async fn get_user_by_identifier(&self, identifier: &str)
    -> Result<(User, String), StoreError>;

    /// All users with the teacher role; empty when there are none.
    async fn get_teachers(&self) -> Result<Vec<User>, StoreError>;

    /// Deletes the user only when both id and role match. Returns rows affected.
    async fn delete_user_by_id(&self, id: &str, role: Role) -> Result<u64, StoreError>;
}

/// Class store: classes scoped to their owning teacher.
#[async_trait]
pub trait ClassStore: Send + Sync {
    async fn create_class(&self, guru_id: Uuid, class: CreateClassDto)
    -> Result<Class, StoreError>;

    /// Classes owned by `guru_id`, newest first.
    async fn get_classes_by_teacher_id(&self, guru_id: Uuid) -> Result<Vec<Class>, StoreError>;
}

#[async_trait]
pub trait Store: UserStore + ClassStore {
    /// Cheap liveness probe used by the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Hashes a plaintext password off the async executor; bcrypt is CPU-bound.
pub(crate) async fn hash_for_storage(password: String) -> Result<String, StoreError> {
    tokio::task::spawn_blocking(move || skripsi_core::hash_password(&password))
        .await
        .map_err(|e| StoreError::Hashing(e.to_string()))?
        .map_err(|e| StoreError::Hashing(e.error.to_string()))
}
