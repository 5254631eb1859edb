//! Stateless JWT authentication.
//!
//! - [`JwtConfig`]: secret and expiry loaded from the environment
//! - [`JwtAuth`]: token issuance and verification
//! - [`require_auth`]: middleware that turns a bearer token into
//!   [`AuthClaims`] request extensions, or rejects with the precise
//!   taxonomy code (NO_TOKEN / INVALID_TOKEN / TOKEN_EXPIRED)

pub mod config;
pub mod jwt;
pub mod middleware;

pub use config::JwtConfig;
pub use jwt::{AuthClaims, AuthError, JwtAuth};
pub use middleware::require_auth;
