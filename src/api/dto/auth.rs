//! DTOs for the authentication endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request: a username/password pair.
///
/// Absent fields deserialize to empty strings so that a missing field and
/// an empty one get the same validation answer.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 64, message = "username is required"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 128, message = "password is required"))]
    pub password: String,
}

/// Opaque success marker. The session token itself only travels in the
/// HttpOnly cookie, never in the body.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
}

/// The current session, echoed back to the client.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user_id: i64,
    pub username: String,
}
