//! Handlers for maintenance records and the type reference list.

use axum::{Extension, Json, extract::State};
use validator::Validate;

use crate::api::dto::maintenance::{
    CreateRecordRequest, CreateRecordResponse, MaintenanceTypeItem, RecordItem,
    maintenance_type_to_item, record_to_item,
};
use crate::application::services::{RecordInput, SessionUser};
use crate::error::AppError;
use crate::state::AppState;

/// Lists the maintenance type reference data.
///
/// # Endpoint
///
/// `GET /maintenance-types`
///
/// Ordered by distance interval ascending.
pub async fn maintenance_types_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<MaintenanceTypeItem>>, AppError> {
    let types = state.maintenance_service.list_types().await?;

    Ok(Json(
        types.into_iter().map(maintenance_type_to_item).collect(),
    ))
}

/// Lists the caller's maintenance records, most recent first.
///
/// # Endpoint
///
/// `GET /maintenance`
///
/// Returns an empty array when no motorcycle is registered yet.
pub async fn list_records_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionUser>,
) -> Result<Json<Vec<RecordItem>>, AppError> {
    let records = state
        .maintenance_service
        .list_records(session.user_id)
        .await?;

    Ok(Json(records.into_iter().map(record_to_item).collect()))
}

/// Logs a completed service event.
///
/// # Endpoint
///
/// `POST /maintenance`
///
/// Side effects, in order: the stored odometer is raised if the record
/// reads higher, open alerts of the same type are completed, and alert
/// generation is re-run.
///
/// # Errors
///
/// Returns 400 on validation failure or an unknown maintenance type, and
/// 404 when no motorcycle is registered.
pub async fn create_record_handler(
    State(state): State<AppState>,
    Extension(session): Extension<SessionUser>,
    Json(payload): Json<CreateRecordRequest>,
) -> Result<Json<CreateRecordResponse>, AppError> {
    payload.validate()?;

    let record = state
        .maintenance_service
        .create_record(
            session.user_id,
            RecordInput {
                maintenance_type_id: payload.maintenance_type_id,
                date: payload.date,
                mileage: payload.mileage,
                cost: payload.cost,
                notes: payload.notes,
                parts_replaced: payload.parts_replaced,
                service_provider: payload.service_provider,
            },
        )
        .await?;

    Ok(Json(CreateRecordResponse {
        success: true,
        id: record.id,
    }))
}
