//! Request-processing middleware and extractors.
//!
//! - [`cors`]: cross-origin headers and the `OPTIONS` short-circuit
//! - [`error_body`]: JSON bodies for router-level 404/405/408 responses
//! - [`pipeline`]: ordered authentication and role-gate stages
//! - [`auth`]: [`AuthUser`](auth::AuthUser), any authenticated caller
//! - [`role`]: [`RequireAdmin`](role::RequireAdmin) and
//!   [`RequireTeacherOrAdmin`](role::RequireTeacherOrAdmin)
//!
//! # Request flow
//!
//! 1. CORS layer decorates the response; `OPTIONS` stops here with 200
//! 2. The handler's extractor runs its pipeline: `Authorization: Bearer <token>`
//!    is verified, then the role gate is checked
//! 3. The handler executes with the caller's claims as an explicit argument
//!
//! ```ignore
//! async fn create_class(
//!     RequireTeacherOrAdmin(auth_user): RequireTeacherOrAdmin,
//!     State(state): State<AppState>,
//!     ValidatedJson(dto): ValidatedJson<CreateClassDto>,
//! ) -> Result<(StatusCode, Json<Class>), AppError> {
//!     let guru_id = auth_user.user_id();
//!     // ...
//! }
//! ```

pub mod auth;
pub mod cors;
pub mod error_body;
pub mod pipeline;
pub mod role;
