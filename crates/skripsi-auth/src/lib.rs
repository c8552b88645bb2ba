//! # Skripsi Auth
//!
//! Identity claims and the stateless token service.
//!
//! - [`claims`]: the signed, time-boxed identity assertion
//! - [`jwt`]: [`TokenService`] issuing and verifying HS256 tokens
//!
//! Verification is pure: it reads only the immutable signing key and the
//! clock, so a single [`TokenService`] is shared by every request task.
//!
//! # Example
//!
//! ```ignore
//! use skripsi_auth::TokenService;
//! use skripsi_config::{Environment, JwtConfig};
//! use skripsi_core::Role;
//!
//! let tokens = TokenService::from_config(&JwtConfig::from_env(Environment::from_env()));
//!
//! let token = tokens.issue(user_id, Role::Teacher)?;
//! let claims = tokens.verify(&token)?;
//! assert_eq!(claims.peran, Role::Teacher);
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{TokenError, TokenService};
