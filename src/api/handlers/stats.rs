//! Handler for the statistics endpoint.

use axum::{Extension, Json, extract::State};

use crate::api::dto::stats::{StatsResponse, stats_to_response};
use crate::application::services::SessionUser;
use crate::error::AppError;
use crate::state::AppState;

/// Returns aggregate maintenance statistics for the caller's motorcycle.
///
/// # Endpoint
///
/// `GET /stats`
///
/// Count, total and average cost, and the latest service date. All zeros
/// and `null` when no motorcycle or records exist yet.
pub async fn stats_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionUser>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats_service.get_for_user(session.user_id).await?;

    Ok(Json(stats_to_response(stats)))
}
