//! Maintenance service: record listing, creation, and its side effects.

use chrono::NaiveDate;
use std::sync::Arc;

use crate::application::services::AlertService;
use crate::domain::entities::{MaintenanceRecord, MaintenanceType, NewRecord, RecordWithType};
use crate::domain::repositories::{
    AlertRepository, MaintenanceTypeRepository, MotorcycleRepository, RecordRepository,
};
use crate::error::AppError;

/// Input data for logging a maintenance record, minus the motorcycle id,
/// which is resolved from the session.
#[derive(Debug, Clone)]
pub struct RecordInput {
    pub maintenance_type_id: i64,
    pub date: NaiveDate,
    pub mileage: i64,
    pub cost: Option<f64>,
    pub notes: Option<String>,
    pub parts_replaced: Option<String>,
    pub service_provider: Option<String>,
}

/// Service for logged service events and the reference type list.
pub struct MaintenanceService {
    records: Arc<dyn RecordRepository>,
    types: Arc<dyn MaintenanceTypeRepository>,
    motorcycles: Arc<dyn MotorcycleRepository>,
    alerts: Arc<dyn AlertRepository>,
    alert_service: Arc<AlertService>,
}

impl MaintenanceService {
    /// Creates a new maintenance service.
    pub fn new(
        records: Arc<dyn RecordRepository>,
        types: Arc<dyn MaintenanceTypeRepository>,
        motorcycles: Arc<dyn MotorcycleRepository>,
        alerts: Arc<dyn AlertRepository>,
        alert_service: Arc<AlertService>,
    ) -> Self {
        Self {
            records,
            types,
            motorcycles,
            alerts,
            alert_service,
        }
    }

    /// Lists the maintenance type reference data, shortest interval first.
    pub async fn list_types(&self) -> Result<Vec<MaintenanceType>, AppError> {
        self.types.list().await
    }

    /// Lists the caller's records, most recent first.
    ///
    /// Returns an empty list when no motorcycle is registered.
    pub async fn list_records(&self, user_id: i64) -> Result<Vec<RecordWithType>, AppError> {
        match self.motorcycles.find_by_user(user_id).await? {
            Some(motorcycle) => self.records.list_with_type(motorcycle.id).await,
            None => Ok(Vec::new()),
        }
    }

    /// Logs a completed service event and applies its side effects, in
    /// order: persist the record, raise the stored odometer if the record
    /// reads higher, complete open alerts of the same type, regenerate
    /// alerts. The sequence is not transactional; a failure partway leaves
    /// the record in place with the remaining steps unapplied.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no motorcycle is registered and
    /// [`AppError::Validation`] for an unknown maintenance type.
    pub async fn create_record(
        &self,
        user_id: i64,
        input: RecordInput,
    ) -> Result<MaintenanceRecord, AppError> {
        let motorcycle = self
            .motorcycles
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("motorcycle not found"))?;

        let maintenance_type = self
            .types
            .find_by_id(input.maintenance_type_id)
            .await?
            .ok_or_else(|| AppError::bad_request("unknown maintenance type"))?;

        let record = self
            .records
            .create(NewRecord {
                motorcycle_id: motorcycle.id,
                maintenance_type_id: maintenance_type.id,
                date: input.date,
                mileage: input.mileage,
                cost: input.cost,
                notes: input.notes,
                parts_replaced: input.parts_replaced,
                service_provider: input.service_provider,
            })
            .await?;

        if record.mileage > motorcycle.current_mileage {
            self.motorcycles
                .set_mileage(motorcycle.id, record.mileage)
                .await?;
        }

        self.alerts
            .complete_open_for_type(motorcycle.id, maintenance_type.id)
            .await?;

        self.alert_service
            .generate_for_motorcycle(motorcycle.id)
            .await?;

        tracing::info!(
            motorcycle_id = motorcycle.id,
            record_id = record.id,
            type_name = %maintenance_type.name,
            "maintenance record logged"
        );

        Ok(record)
    }
}
