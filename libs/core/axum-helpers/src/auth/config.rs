//! JWT configuration.

use core_config::{ConfigError, FromEnv, env_or_default, env_required};

/// JWT authentication configuration.
///
/// Loaded from environment variables:
/// - `JWT_SECRET` (required) - Must be at least 32 characters
/// - `JWT_EXPIRY_HOURS` (optional, default: 24)
///
/// # Example
///
/// ```ignore
/// use axum_helpers::JwtConfig;
/// use core_config::FromEnv;
///
/// // From environment variables
/// let config = JwtConfig::from_env()?;
///
/// // Manual construction (for testing)
/// let config = JwtConfig::new("my-super-secret-key-that-is-at-least-32-chars");
/// ```
#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// JWT signing secret (minimum 32 characters)
    pub secret: String,
    /// Token lifetime in hours
    pub expiry_hours: i64,
}

impl JwtConfig {
    /// Create a new JwtConfig with the given secret and the default
    /// 24-hour expiry.
    ///
    /// # Panics
    /// Panics if the secret is less than 32 characters.
    pub fn new(secret: impl Into<String>) -> Self {
        let secret = secret.into();
        assert!(
            secret.len() >= 32,
            "JWT secret must be at least 32 characters"
        );
        Self {
            secret,
            expiry_hours: 24,
        }
    }

    /// Override the token lifetime. Negative values produce already-expired
    /// tokens, which is occasionally useful in tests.
    pub fn with_expiry_hours(mut self, expiry_hours: i64) -> Self {
        self.expiry_hours = expiry_hours;
        self
    }
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;

        if secret.len() < 32 {
            return Err(ConfigError::ParseError {
                key: "JWT_SECRET".to_string(),
                details: format!(
                    "must be at least 32 characters for security (got {}). Generate one with: openssl rand -base64 32",
                    secret.len()
                ),
            });
        }

        let expiry_hours = env_or_default("JWT_EXPIRY_HOURS", "24").parse().map_err(
            |e| ConfigError::ParseError {
                key: "JWT_EXPIRY_HOURS".to_string(),
                details: format!("{}", e),
            },
        )?;

        Ok(Self {
            secret,
            expiry_hours,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "this-is-a-valid-secret-with-32-chars!";

    #[test]
    fn test_jwt_config_new_valid() {
        let config = JwtConfig::new(SECRET);
        assert_eq!(config.secret, SECRET);
        assert_eq!(config.expiry_hours, 24);
    }

    #[test]
    #[should_panic(expected = "JWT secret must be at least 32 characters")]
    fn test_jwt_config_new_too_short() {
        JwtConfig::new("short");
    }

    #[test]
    fn test_jwt_config_from_env_valid() {
        temp_env::with_vars(
            [
                ("JWT_SECRET", Some(SECRET)),
                ("JWT_EXPIRY_HOURS", Some("12")),
            ],
            || {
                let config = JwtConfig::from_env().unwrap();
                assert_eq!(config.secret, SECRET);
                assert_eq!(config.expiry_hours, 12);
            },
        );
    }

    #[test]
    fn test_jwt_config_from_env_rejects_short_secret() {
        temp_env::with_var("JWT_SECRET", Some("too-short"), || {
            assert!(JwtConfig::from_env().is_err());
        });
    }

    #[test]
    fn test_jwt_config_from_env_missing_secret() {
        temp_env::with_var_unset("JWT_SECRET", || {
            assert!(JwtConfig::from_env().is_err());
        });
    }
}
