//! Authentication service: credential checks and session tokens.

use chrono::Utc;
use hmac::{Hmac, Mac};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// The authenticated caller, decoded from a session token.
///
/// Inserted into request extensions by the auth middleware and consumed by
/// every protected handler.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user_id: i64,
    pub username: String,
}

/// JWT claims carried by the session cookie.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: i64,
    username: String,
    iat: i64,
    exp: i64,
}

/// Service for credential verification and session token handling.
///
/// Passwords are hashed with HMAC-SHA256 keyed by `password_signing_secret`
/// before storage and comparison; an attacker with read-only access to the
/// database cannot verify or forge credentials without the server-side
/// secret. Session tokens are HS256 JWTs signed with `session_secret`.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    session_secret: String,
    password_signing_secret: String,
    session_ttl_seconds: i64,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `users` - user repository for credential lookups
    /// - `session_secret` - HS256 signing key for session tokens
    /// - `password_signing_secret` - HMAC key for password hashes; must match
    ///   the value used when the users were provisioned
    /// - `session_ttl_seconds` - session token lifetime
    pub fn new(
        users: Arc<dyn UserRepository>,
        session_secret: String,
        password_signing_secret: String,
        session_ttl_seconds: i64,
    ) -> Self {
        Self {
            users,
            session_secret,
            password_signing_secret,
            session_ttl_seconds,
        }
    }

    /// Session token lifetime, also used as the cookie max-age.
    pub fn session_ttl_seconds(&self) -> i64 {
        self.session_ttl_seconds
    }

    /// Hashes a password with HMAC-SHA256 using the signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    pub fn hash_password(&self, password: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.password_signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(password.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Checks a username/password pair and issues a session token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with a uniform message when the
    /// user is unknown or the password does not match; the two cases are
    /// never distinguished to the caller.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(SessionUser, String), AppError> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid credentials"))?;

        if self.hash_password(password) != user.password_hash {
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        let token = self.issue_token(&user)?;
        tracing::info!(username = %user.username, "login");

        Ok((
            SessionUser {
                user_id: user.id,
                username: user.username,
            },
            token,
        ))
    }

    /// Signs a session token for a user.
    fn issue_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user.id,
            username: user.username.clone(),
            iat: now,
            exp: now + self.session_ttl_seconds,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.session_secret.as_bytes()),
        )
        .map_err(|e| AppError::internal(format!("failed to sign session token: {e}")))
    }

    /// Verifies a session token: signature and expiry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] on any defect; invalid and expired
    /// tokens are answered identically.
    pub fn verify_token(&self, token: &str) -> Result<SessionUser, AppError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.session_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| AppError::unauthorized("Unauthorized"))?;

        Ok(SessionUser {
            user_id: data.claims.sub,
            username: data.claims.username,
        })
    }

    /// Provisions a user with a hashed password.
    ///
    /// Used by the admin CLI and the gated startup bootstrap; there is no
    /// self-service registration endpoint.
    pub async fn provision_user(&self, username: &str, password: &str) -> Result<User, AppError> {
        self.users
            .create(NewUser {
                username: username.to_string(),
                password_hash: self.hash_password(password),
            })
            .await
    }

    /// Provisions a user unless the username already exists.
    ///
    /// Returns `true` when the user was created. Backs the gated startup
    /// bootstrap, which must be idempotent across restarts.
    pub async fn ensure_user(&self, username: &str, password: &str) -> Result<bool, AppError> {
        if self.users.find_by_username(username).await?.is_some() {
            return Ok(false);
        }
        self.provision_user(username, password).await?;
        Ok(true)
    }
}
