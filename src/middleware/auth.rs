use axum::{extract::FromRequestParts, http::request::Parts};
use skripsi_auth::Claims;
use skripsi_core::{AppError, Role};
use uuid::Uuid;

use crate::middleware::pipeline::Pipeline;
use crate::state::AppState;

/// Extractor that runs the authentication stage and hands the handler the
/// caller's verified claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> Uuid {
        self.0.user_id
    }

    pub fn role(&self) -> Role {
        self.0.peran
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = Pipeline::AUTHENTICATED.run(&parts.headers, &state.tokens)?;
        Ok(AuthUser(claims))
    }
}
