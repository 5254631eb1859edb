use async_trait::async_trait;
use uuid::Uuid;

use crate::error::UserResult;
use crate::models::User;

/// Repository trait for User persistence
///
/// Emails passed in are expected to be lowercased already; uniqueness is
/// ultimately enforced by the store's unique index.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user; fails with DuplicateEmail if the email is taken
    async fn create(&self, user: User) -> UserResult<User>;

    /// Get a user by ID
    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    /// Get a user by (lowercased) email
    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Whether a user with this email exists
    async fn email_exists(&self, email: &str) -> UserResult<bool>;
}
