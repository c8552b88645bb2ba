use std::sync::LazyLock;

use skripsi_auth::TokenService;
use skripsi_core::{AppError, Role, hash_password, verify_password};
use skripsi_models::{CreateUserDto, LoginRequest, LoginResponse, NewUser};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::store::{Store, StoreError};

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid identifier or password";

/// Compared against when the identifier matches no user, so both failure
/// paths pay for one bcrypt verification.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("dummy-password-for-timing").ok());

pub struct AuthService;

impl AuthService {
    /// Creates an account with `role` pinned by the caller, never by the body.
    #[instrument(skip(store, dto), fields(user.role = %role))]
    pub async fn create_account(
        store: &dyn Store,
        dto: CreateUserDto,
        role: Role,
    ) -> Result<Uuid, AppError> {
        let id = store
            .create_user(NewUser::from(dto), role)
            .await
            .map_err(|e| e.into_app_error())?;

        info!(user.id = %id, "Account created");
        Ok(id)
    }

    #[instrument(skip(store, dto))]
    pub async fn register_student(store: &dyn Store, dto: CreateUserDto) -> Result<Uuid, AppError> {
        Self::create_account(store, dto, Role::Student).await
    }

    #[instrument(skip(store, tokens, dto))]
    pub async fn login(
        store: &dyn Store,
        tokens: &TokenService,
        dto: LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        let found = match store.get_user_by_identifier(dto.identifier.trim()).await {
            Ok(found) => Some(found),
            Err(StoreError::NotFound) => None,
            Err(e) => return Err(e.into_app_error()),
        };

        let stored_hash = found.as_ref().map(|(_, hash)| hash.clone());
        let password = dto.password;
        let password_matches = tokio::task::spawn_blocking(move || -> Result<bool, AppError> {
            match stored_hash.as_deref().or(DUMMY_HASH.as_deref()) {
                Some(hash) => Ok(verify_password(&password, hash)? && stored_hash.is_some()),
                None => Ok(false),
            }
        })
        .await
        .map_err(AppError::internal)??;

        let Some((user, _)) = found.filter(|_| password_matches) else {
            warn!("Login rejected");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS_MESSAGE));
        };

        let token = tokens.issue(user.id, user.peran).map_err(AppError::internal)?;

        info!(user.id = %user.id, user.role = %user.peran, "User logged in");
        Ok(LoginResponse { token })
    }
}
