//! User Service - registration and credential verification

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{RegisterRequest, User};
use crate::repository::UserRepository;

/// Service layer for user business logic.
///
/// Argon2 hashing and verification are deliberately expensive, so both run
/// under `spawn_blocking` to keep the request-serving executor responsive.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    async fn hash_password(password: String) -> UserResult<String> {
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| UserError::PasswordHash(e.to_string()))
        })
        .await
        .map_err(|e| UserError::Internal(e.to_string()))?
    }

    async fn verify_password(password: String, hash: String) -> UserResult<bool> {
        tokio::task::spawn_blocking(move || {
            let parsed =
                PasswordHash::new(&hash).map_err(|e| UserError::PasswordHash(e.to_string()))?;
            Ok(Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok())
        })
        .await
        .map_err(|e| UserError::Internal(e.to_string()))?
    }

    /// Register a new account with the default role.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: RegisterRequest) -> UserResult<User> {
        let email = input.email.trim().to_lowercase();

        if self.repository.email_exists(&email).await? {
            return Err(UserError::DuplicateEmail(email));
        }

        let password_hash = Self::hash_password(input.password).await?;
        let user = User::new(email, password_hash);

        // The unique index backstops the exists-then-create race
        self.repository.create(user).await
    }

    /// Check an email/password pair, returning the user on success.
    /// Both unknown email and wrong password collapse into the same
    /// InvalidCredentials error.
    #[instrument(skip(self, email, password))]
    pub async fn verify_credentials(&self, email: &str, password: &str) -> UserResult<User> {
        let user = self
            .repository
            .get_by_email(&email.trim().to_lowercase())
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if Self::verify_password(password.to_string(), user.password_hash.clone()).await? {
            Ok(user)
        } else {
            Err(UserError::InvalidCredentials)
        }
    }

    /// Get a user by id.
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: Uuid) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
