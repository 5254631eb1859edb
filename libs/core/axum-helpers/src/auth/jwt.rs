use super::config::JwtConfig;
use crate::errors::AppError;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims embedded in every issued token.
///
/// The subject is the authenticated user id; email and role ride along so
/// handlers can act on the identity without a store round-trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthClaims {
    /// Subject (user ID)
    pub sub: Uuid,
    /// User email
    pub email: String,
    /// User role ("user" | "admin")
    pub role: String,
    /// Expiration time (unix seconds)
    pub exp: i64,
    /// Issued at (unix seconds)
    pub iat: i64,
}

/// Token verification/issuance failures.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("No token provided")]
    Missing,

    #[error("Token has expired")]
    Expired,

    #[error("Token is invalid")]
    Invalid,

    #[error("Token generation failed: {0}")]
    Creation(String),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Missing => AppError::NoToken,
            AuthError::Expired => AppError::TokenExpired,
            AuthError::Invalid => AppError::InvalidToken,
            AuthError::Creation(msg) => AppError::Internal(msg),
        }
    }
}

/// Stateless HS256 JWT issuance and verification.
#[derive(Clone)]
pub struct JwtAuth {
    secret: String,
    expiry_hours: i64,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            expiry_hours: config.expiry_hours,
        }
    }

    /// Sign a token for the given identity with the configured expiry.
    pub fn create_token(
        &self,
        user_id: Uuid,
        email: &str,
        role: &str,
    ) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = AuthClaims {
            sub: user_id,
            email: email.to_string(),
            role: role.to_string(),
            exp: (now + Duration::hours(self.expiry_hours)).timestamp(),
            iat: now.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::Creation(e.to_string()))
    }

    /// Verify signature and expiry, returning the decoded claims.
    pub fn verify_token(&self, token: &str) -> Result<AuthClaims, AuthError> {
        let token_data = decode::<AuthClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
            _ => AuthError::Invalid,
        })?;

        Ok(token_data.claims)
    }
}
