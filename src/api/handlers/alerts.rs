//! Handlers for the alert endpoints.

use axum::{
    Extension, Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::api::dto::alert::{
    AlertItem, AlertListQuery, CompleteAlertRequest, CompleteAlertResponse, RegenerateResponse,
    alert_to_item,
};
use crate::application::services::SessionUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the caller's alerts, open ones by default.
///
/// # Endpoint
///
/// `GET /alerts[?include_completed=true]`
///
/// Ordered by due mileage ascending. Returns an empty array when no
/// motorcycle is registered yet.
pub async fn list_alerts_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionUser>,
    Query(query): Query<AlertListQuery>,
) -> Result<Json<Vec<AlertItem>>, AppError> {
    let alerts = state
        .alert_service
        .list_for_user(session.user_id, query.include_completed.unwrap_or(false))
        .await?;

    Ok(Json(alerts.into_iter().map(alert_to_item).collect()))
}

/// Marks one of the caller's alerts completed.
///
/// # Endpoint
///
/// `POST /alerts`
///
/// # Errors
///
/// Returns 404 for an unknown alert and 401 when the alert belongs to a
/// different motorcycle.
pub async fn complete_alert_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionUser>,
    Json(payload): Json<CompleteAlertRequest>,
) -> Result<Json<CompleteAlertResponse>, AppError> {
    payload.validate()?;

    state
        .alert_service
        .complete(session.user_id, payload.alert_id)
        .await?;

    Ok(Json(CompleteAlertResponse { success: true }))
}

/// Re-runs alert generation for the caller's motorcycle.
///
/// # Endpoint
///
/// `PUT /alerts`
///
/// # Errors
///
/// Returns 404 when no motorcycle is registered.
pub async fn regenerate_alerts_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionUser>,
) -> Result<Json<RegenerateResponse>, AppError> {
    let alerts_created = state
        .alert_service
        .regenerate_for_user(session.user_id)
        .await?;

    Ok(Json(RegenerateResponse {
        success: true,
        alerts_created,
    }))
}
