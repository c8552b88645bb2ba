use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use skripsi_core::Role;
use skripsi_models::{Class, CreateClassDto, NewUser, User};
use sqlx::{FromRow, PgPool};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use super::{ClassStore, Store, StoreError, UniqueField, UserStore, hash_for_storage};

const USERNAME_CONSTRAINT: &str = "users_username_key";
const EMAIL_CONSTRAINT: &str = "users_email_key";

/// Postgres-backed [`Store`]. Every call is bounded by `query_timeout`;
/// dropping the returned future cancels the in-flight query.
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
    query_timeout: Duration,
}

#[derive(FromRow)]
struct UserWithHash {
    #[sqlx(flatten)]
    user: User,
    password_hash: String,
}

impl PgStore {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn bounded<T, F>(&self, query: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, sqlx::Error>> + Send,
    {
        tokio::time::timeout(self.query_timeout, query)
            .await
            .map_err(|_| StoreError::Timeout)?
            .map_err(StoreError::from)
    }
}

fn unique_field_for_constraint(constraint: &str) -> Option<UniqueField> {
    match constraint {
        USERNAME_CONSTRAINT => Some(UniqueField::Username),
        EMAIL_CONSTRAINT => Some(UniqueField::Email),
        _ => None,
    }
}

fn map_insert_error(err: StoreError) -> StoreError {
    let conflict = match &err {
        StoreError::Database(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            db_err.constraint().and_then(unique_field_for_constraint)
        }
        _ => None,
    };

    match conflict {
        Some(field) => StoreError::Conflict(field),
        None => err,
    }
}

#[async_trait]
impl UserStore for PgStore {
    #[instrument(skip(self, user), fields(db.operation = "INSERT", db.table = "users", user.role = %role))]
    async fn create_user(&self, user: NewUser, role: Role) -> Result<Uuid, StoreError> {
        let password_hash = hash_for_storage(user.password).await?;

        let id = self
            .bounded(
                sqlx::query_scalar::<_, Uuid>(
                    "INSERT INTO users (nama_lengkap, username, email, password_hash, peran)
                     VALUES ($1, $2, $3, $4, $5)
                     RETURNING id",
                )
                .bind(&user.nama_lengkap)
                .bind(&user.username)
                .bind(&user.email)
                .bind(&password_hash)
                .bind(role)
                .fetch_one(&self.pool),
            )
            .await
            .map_err(map_insert_error)?;

        debug!(user.id = %id, "User row inserted");
        Ok(id)
    }

    #[instrument(skip(self, identifier), fields(db.operation = "SELECT", db.table = "users"))]
    async fn get_user_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<(User, String), StoreError> {
        let row = self
            .bounded(
                sqlx::query_as::<_, UserWithHash>(
                    "SELECT id, nama_lengkap, username, email, password_hash, peran
                     FROM users
                     WHERE email = $1 OR username = $1
                     ORDER BY (email = $1) DESC
                     LIMIT 1",
                )
                .bind(identifier)
                .fetch_optional(&self.pool),
            )
            .await?
            .ok_or(StoreError::NotFound)?;

        Ok((row.user, row.password_hash))
    }

    #[instrument(skip(self), fields(db.operation = "SELECT", db.table = "users"))]
    async fn get_teachers(&self) -> Result<Vec<User>, StoreError> {
        self.bounded(
            sqlx::query_as::<_, User>(
                "SELECT id, nama_lengkap, username, email, peran
                 FROM users
                 WHERE peran = $1
                 ORDER BY nama_lengkap, id",
            )
            .bind(Role::Teacher)
            .fetch_all(&self.pool),
        )
        .await
    }

    #[instrument(skip(self), fields(db.operation = "DELETE", db.table = "users"))]
    async fn delete_user_by_id(&self, id: &str, role: Role) -> Result<u64, StoreError> {
        let Ok(id) = Uuid::parse_str(id) else {
            warn!(user.id = %id, "Delete requested for malformed id");
            return Ok(0);
        };

        let result = self
            .bounded(
                sqlx::query("DELETE FROM users WHERE id = $1 AND peran = $2")
                    .bind(id)
                    .bind(role)
                    .execute(&self.pool),
            )
            .await?;

        Ok(result.rows_affected())
    }
}

#[async_trait]
impl ClassStore for PgStore {
    #[instrument(skip(self, class), fields(db.operation = "INSERT", db.table = "classes"))]
    async fn create_class(
        &self,
        guru_id: Uuid,
        class: CreateClassDto,
    ) -> Result<Class, StoreError> {
        self.bounded(
            sqlx::query_as::<_, Class>(
                "INSERT INTO classes (guru_id, nama_kelas, deskripsi)
                 VALUES ($1, $2, $3)
                 RETURNING id, guru_id, nama_kelas, deskripsi, created_at",
            )
            .bind(guru_id)
            .bind(class.nama_kelas.trim())
            .bind(&class.deskripsi)
            .fetch_one(&self.pool),
        )
        .await
    }

    #[instrument(skip(self), fields(db.operation = "SELECT", db.table = "classes"))]
    async fn get_classes_by_teacher_id(&self, guru_id: Uuid) -> Result<Vec<Class>, StoreError> {
        self.bounded(
            sqlx::query_as::<_, Class>(
                "SELECT id, guru_id, nama_kelas, deskripsi, created_at
                 FROM classes
                 WHERE guru_id = $1
                 ORDER BY created_at DESC, id DESC",
            )
            .bind(guru_id)
            .fetch_all(&self.pool),
        )
        .await
    }
}

#[async_trait]
impl Store for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.bounded(sqlx::query("SELECT 1").execute(&self.pool))
            .await
            .map(|_| ())
    }
}
