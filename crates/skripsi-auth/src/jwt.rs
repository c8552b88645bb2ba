//! Token issuing and verification.
//!
//! Tokens are HS256 JWTs carrying [`Claims`]. Expiry is enforced here with
//! zero leeway: a token is accepted only while `now < exp`.
//!
//! A [`TokenService`] built without a signing key fails closed. It refuses
//! to issue tokens and rejects every token presented to it.

use std::fmt;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use skripsi_config::JwtConfig;
use skripsi_core::Role;
use uuid::Uuid;

use crate::claims::Claims;

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// Bad signature, malformed encoding, unknown role or expired.
    #[error("invalid token")]
    InvalidToken,
    #[error("no signing key configured")]
    MissingSigningKey,
    #[error("failed to encode token: {0}")]
    Encoding(String),
}

struct SigningKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

pub struct TokenService {
    keys: Option<SigningKeys>,
    ttl_seconds: i64,
    validation: Validation,
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("has_signing_key", &self.keys.is_some())
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

impl TokenService {
    pub fn new(secret: Option<&str>, ttl_seconds: i64) -> Self {
        let keys = secret.map(|secret| SigningKeys {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        });

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = false;

        Self {
            keys,
            ttl_seconds,
            validation,
        }
    }

    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(config.secret.as_deref(), config.token_ttl_seconds)
    }

    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    pub fn has_signing_key(&self) -> bool {
        self.keys.is_some()
    }

    /// Issues a token valid for the configured lifetime.
    pub fn issue(&self, user_id: Uuid, role: Role) -> Result<String, TokenError> {
        self.issue_with_ttl(user_id, role, self.ttl_seconds)
    }

    pub fn issue_with_ttl(
        &self,
        user_id: Uuid,
        role: Role,
        ttl_seconds: i64,
    ) -> Result<String, TokenError> {
        self.issue_at(user_id, role, ttl_seconds, Utc::now().timestamp())
    }

    /// Issues a token as if the current time were `now` (Unix seconds).
    pub fn issue_at(
        &self,
        user_id: Uuid,
        role: Role,
        ttl_seconds: i64,
        now: i64,
    ) -> Result<String, TokenError> {
        let keys = self.keys.as_ref().ok_or(TokenError::MissingSigningKey)?;

        let claims = Claims {
            user_id,
            peran: role,
            iat: now,
            exp: now.saturating_add(ttl_seconds),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &keys.encoding)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Verifies a token as if the current time were `now` (Unix seconds).
    pub fn verify_at(&self, token: &str, now: i64) -> Result<Claims, TokenError> {
        let keys = self.keys.as_ref().ok_or(TokenError::InvalidToken)?;

        let claims = decode::<Claims>(token, &keys.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::InvalidToken)?;

        if claims.is_expired_at(now) {
            return Err(TokenError::InvalidToken);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skripsi_config::Environment;

    const SECRET: &str = "test-secret-key-at-least-32-characters-long";

    fn service() -> TokenService {
        TokenService::new(Some(SECRET), 3600)
    }

    #[test]
    fn test_round_trip_preserves_identity() {
        let tokens = service();
        let user_id = Uuid::new_v4();

        for role in Role::ALL {
            let token = tokens.issue(user_id, role).unwrap();
            let claims = tokens.verify(&token).unwrap();
            assert_eq!(claims.user_id, user_id);
            assert_eq!(claims.peran, role);
            assert_eq!(claims.exp - claims.iat, 3600);
        }
    }

    #[test]
    fn test_zero_ttl_is_expired_immediately() {
        let tokens = service();
        let token = tokens.issue_with_ttl(Uuid::new_v4(), Role::Teacher, 0).unwrap();
        assert!(matches!(tokens.verify(&token), Err(TokenError::InvalidToken)));
    }

    #[test]
    fn test_fixed_clock_expiry() {
        let tokens = service();
        let token = tokens
            .issue_at(Uuid::new_v4(), Role::Student, 60, 1_000)
            .unwrap();

        assert!(tokens.verify_at(&token, 1_000).is_ok());
        assert!(tokens.verify_at(&token, 1_059).is_ok());
        assert!(matches!(
            tokens.verify_at(&token, 1_060),
            Err(TokenError::InvalidToken)
        ));
    }

    #[test]
    fn test_same_clock_is_deterministic() {
        let tokens = service();
        let user_id = Uuid::new_v4();
        let first = tokens.issue_at(user_id, Role::Teacher, 60, 1_000).unwrap();
        let second = tokens.issue_at(user_id, Role::Teacher, 60, 1_000).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = service().issue(Uuid::new_v4(), Role::Superadmin).unwrap();
        let other = TokenService::new(Some("different-secret-key-at-least-32-characters"), 3600);
        assert!(matches!(other.verify(&token), Err(TokenError::InvalidToken)));
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        assert!(matches!(
            service().verify("not-a-token"),
            Err(TokenError::InvalidToken)
        ));
        assert!(matches!(service().verify(""), Err(TokenError::InvalidToken)));
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let tokens = service();
        let token = tokens.issue(Uuid::new_v4(), Role::Student).unwrap();
        let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
        let forged = tokens.issue(Uuid::new_v4(), Role::Superadmin).unwrap();
        parts[1] = forged.split('.').nth(1).unwrap().to_string();
        assert!(matches!(
            tokens.verify(&parts.join(".")),
            Err(TokenError::InvalidToken)
        ));
    }

    #[test]
    fn test_missing_key_fails_closed() {
        let signed = service().issue(Uuid::new_v4(), Role::Superadmin).unwrap();
        let keyless = TokenService::new(None, 3600);

        assert!(!keyless.has_signing_key());
        assert!(matches!(
            keyless.issue(Uuid::new_v4(), Role::Superadmin),
            Err(TokenError::MissingSigningKey)
        ));
        assert!(matches!(keyless.verify(&signed), Err(TokenError::InvalidToken)));
    }

    #[test]
    fn test_from_config_uses_ttl() {
        let config = JwtConfig::resolve(Some(SECRET.to_string()), 120, Environment::Production);
        let tokens = TokenService::from_config(&config);
        let claims = tokens
            .verify(&tokens.issue(Uuid::new_v4(), Role::Teacher).unwrap())
            .unwrap();
        assert_eq!(claims.exp - claims.iat, 120);
    }
}
