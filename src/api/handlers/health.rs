//! Handler for the health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: all components healthy
/// - **503 Service Unavailable**: one or more components degraded
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let db_check = check_database(&state).await;

    let all_healthy = db_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: state.store_backend.as_str().to_string(),
        checks: HealthChecks { database: db_check },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks storage connectivity by listing the maintenance type reference
/// data, which exists on both backends from the first start.
async fn check_database(state: &AppState) -> CheckStatus {
    match state.maintenance_service.list_types().await {
        Ok(types) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} maintenance types", types.len())),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("storage error: {e}")),
        },
    }
}
