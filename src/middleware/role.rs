//! Role-gated extractors.
//!
//! Each extractor runs a full [`Pipeline`](crate::middleware::pipeline::Pipeline)
//! (authenticate, then gate) and yields the authenticated `AuthUser` only if
//! every stage passed.
//!
//! ```rust,ignore
//! pub async fn list_teachers(
//!     RequireAdmin(auth_user): RequireAdmin,
//!     State(state): State<AppState>,
//! ) -> Result<Json<Vec<User>>, AppError> {
//!     // Only superadmins get here
//! }
//! ```

/// Declares an extractor struct that runs the given pipeline.
#[macro_export]
macro_rules! require_role_gate {
    ($name:ident, $pipeline:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::auth::AuthUser);

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = $crate::skripsi_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                let claims = $pipeline.run(&parts.headers, &state.tokens)?;
                Ok($name($crate::middleware::auth::AuthUser(claims)))
            }
        }
    };
}

require_role_gate!(RequireAdmin, crate::middleware::pipeline::Pipeline::ADMIN_ONLY);
require_role_gate!(
    RequireTeacherOrAdmin,
    crate::middleware::pipeline::Pipeline::TEACHER_OR_ADMIN
);

