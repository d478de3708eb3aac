//! Repository trait for maintenance record data access.

use crate::domain::entities::{MaintenanceRecord, NewRecord, RecordWithType};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for logged service events.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Logs a completed service event.
    async fn create(&self, new_record: NewRecord) -> Result<MaintenanceRecord, AppError>;

    /// Lists a motorcycle's records, most recent date first.
    ///
    /// Ties on the same date break by id descending, so the latest insert
    /// wins when the alert generator looks for the newest record of a type.
    async fn list_for_motorcycle(
        &self,
        motorcycle_id: i64,
    ) -> Result<Vec<MaintenanceRecord>, AppError>;

    /// Lists a motorcycle's records joined with their maintenance type,
    /// most recent date first.
    async fn list_with_type(&self, motorcycle_id: i64) -> Result<Vec<RecordWithType>, AppError>;
}
