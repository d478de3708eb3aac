//! Cookie-session authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::cookie;

/// Authenticates requests using the session cookie.
///
/// # Cookie Format
///
/// ```text
/// Cookie: auth_token=<jwt>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract the `auth_token` cookie from the request
/// 2. Verify signature and expiry via
///    [`crate::application::services::AuthService`]
/// 3. Insert the decoded [`SessionUser`] into request extensions
/// 4. Continue to the handler
///
/// # Errors
///
/// Returns `401 Unauthorized` when the cookie is missing, malformed,
/// expired, or carries a bad signature. All cases get the same body, so a
/// caller cannot probe which defect applied.
///
/// [`SessionUser`]: crate::application::services::SessionUser
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token =
        cookie::extract(req.headers()).ok_or_else(|| AppError::unauthorized("Unauthorized"))?;

    let session = st.auth_service.verify_token(&token)?;
    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}
