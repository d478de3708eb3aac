//! Handlers for the authentication endpoints.

use axum::{Extension, Json, extract::State, http::header, response::IntoResponse};
use validator::Validate;

use crate::api::dto::auth::{LoginRequest, LoginResponse, SessionResponse};
use crate::application::services::SessionUser;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::cookie;

/// Checks credentials and opens a session.
///
/// # Endpoint
///
/// `POST /auth/login`
///
/// On success the session token is set as an HttpOnly cookie and the body
/// carries only an opaque success marker.
///
/// # Errors
///
/// Returns 400 when a field is missing and 401 on bad credentials, with the
/// unknown-user and wrong-password cases indistinguishable.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let (_, token) = state
        .auth_service
        .login(&payload.username, &payload.password)
        .await?;

    let cookie = cookie::build(
        &token,
        state.auth_service.session_ttl_seconds(),
        state.cookie_secure,
    );

    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse { success: true }),
    ))
}

/// Closes the session by clearing the cookie.
///
/// # Endpoint
///
/// `POST /auth/logout`
///
/// Always succeeds; an absent session is not an error here.
pub async fn logout_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::SET_COOKIE, cookie::clear(state.cookie_secure))],
        Json(LoginResponse { success: true }),
    )
}

/// Echoes the current session.
///
/// # Endpoint
///
/// `GET /auth`
pub async fn session_handler(Extension(session): Extension<SessionUser>) -> Json<SessionResponse> {
    Json(SessionResponse {
        user_id: session.user_id,
        username: session.username,
    })
}
