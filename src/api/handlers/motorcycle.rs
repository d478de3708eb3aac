//! Handlers for the motorcycle endpoints.

use axum::{Extension, Json, extract::State};
use validator::Validate;

use crate::api::dto::motorcycle::{
    MileageUpdateRequest, MileageUpdateResponse, MotorcycleItem, MotorcycleUpsertRequest,
    UpsertResponse, motorcycle_to_item,
};
use crate::application::services::SessionUser;
use crate::domain::entities::MotorcyclePatch;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the caller's motorcycle.
///
/// # Endpoint
///
/// `GET /motorcycle`
///
/// # Errors
///
/// Returns 404 when none has been registered yet.
pub async fn get_motorcycle_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionUser>,
) -> Result<Json<MotorcycleItem>, AppError> {
    let motorcycle = state
        .motorcycle_service
        .get_for_user(session.user_id)
        .await?;

    Ok(Json(motorcycle_to_item(motorcycle)))
}

/// Creates or partially updates the caller's motorcycle.
///
/// # Endpoint
///
/// `POST /motorcycle`
///
/// # Errors
///
/// Returns 400 when creating without `model`/`year`, on a malformed license
/// plate, or on an odometer regression.
pub async fn upsert_motorcycle_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionUser>,
    Json(payload): Json<MotorcycleUpsertRequest>,
) -> Result<Json<UpsertResponse>, AppError> {
    payload.validate()?;
    payload.validate_plate()?;

    let patch = MotorcyclePatch {
        model: payload.model,
        year: payload.year,
        license_plate: payload.license_plate,
        chassis: payload.chassis,
        purchase_date: payload.purchase_date,
        current_mileage: payload.current_mileage,
    };

    let motorcycle = state
        .motorcycle_service
        .upsert(session.user_id, patch)
        .await?;

    Ok(Json(UpsertResponse {
        success: true,
        id: motorcycle.id,
    }))
}

/// Sets the odometer reading.
///
/// # Endpoint
///
/// `POST /motorcycle/mileage`
///
/// # Errors
///
/// Returns 400 when the new value is below the stored reading and 404 when
/// no motorcycle is registered.
pub async fn update_mileage_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionUser>,
    Json(payload): Json<MileageUpdateRequest>,
) -> Result<Json<MileageUpdateResponse>, AppError> {
    payload.validate()?;

    let update = state
        .motorcycle_service
        .set_mileage(session.user_id, payload.mileage)
        .await?;

    Ok(Json(MileageUpdateResponse {
        success: true,
        previous_mileage: update.previous_mileage,
        current_mileage: update.current_mileage,
    }))
}
