use serde::{Deserialize, Serialize};
use skripsi_core::Role;
use utoipa::ToSchema;
use uuid::Uuid;

/// Decoded payload of an identity token.
///
/// Never stored server-side; re-verified on every protected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    pub user_id: Uuid,
    pub peran: Role,
    /// Issued-at (Unix timestamp, seconds)
    pub iat: i64,
    /// Expiration (Unix timestamp, seconds)
    pub exp: i64,
}

impl Claims {
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}
