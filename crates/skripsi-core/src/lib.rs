//! # Skripsi Core
//!
//! Core types, errors, and utilities for the essay scoring API.
//!
//! This crate provides foundational types used throughout the application:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: Password hashing and verification
//! - [`roles`]: The closed set of user roles
//! - [`serde`]: Custom serde deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use skripsi_core::{AppError, Role, hash_password, verify_password};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Teacher not found"));
//!
//! let hash = hash_password("secure_password")?;
//! assert!(verify_password("secure_password", &hash)?);
//!
//! assert_eq!(Role::Superadmin.as_str(), "superadmin");
//! ```

pub mod errors;
pub mod password;
pub mod roles;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{hash_password, verify_password};
pub use roles::Role;
