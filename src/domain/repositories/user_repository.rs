//! Repository trait for user credential storage.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for user accounts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL
/// - [`crate::infrastructure::memory::MemUserRepository`] - in-memory backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a new user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the username is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds a user by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Replaces a user's password hash.
    ///
    /// Returns `Ok(true)` if the user existed, `Ok(false)` otherwise.
    async fn update_password(&self, id: i64, password_hash: &str) -> Result<bool, AppError>;

    /// Lists all users, oldest first. Used by the admin CLI.
    async fn list(&self) -> Result<Vec<User>, AppError>;
}
