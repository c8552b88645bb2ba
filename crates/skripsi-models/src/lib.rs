//! # Skripsi Models
//!
//! Domain models and DTOs for the essay scoring API.
//!
//! - [`auth`]: login and registration payloads
//! - [`classes`]: classes owned by a teacher
//! - [`users`]: user records (students, teachers, superadmins)
//! - [`validation`]: shared field validators
//!
//! Field names follow the persisted schema (`nama_lengkap`, `peran`,
//! `guru_id`, `nama_kelas`, `deskripsi`), which is also the JSON wire format.

pub mod auth;
pub mod classes;
pub mod users;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use auth::{CreatedUserResponse, LoginRequest, LoginResponse, MessageResponse};
pub use classes::{Class, CreateClassDto};
pub use users::{CreateUserDto, NewUser, User};
