//! User entity for credential storage.

use chrono::{DateTime, Utc};

/// An account that owns a motorcycle and its maintenance history.
///
/// The `password_hash` is an HMAC-SHA256 of the password keyed by the
/// server-side signing secret; the raw password is never stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for provisioning a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}
