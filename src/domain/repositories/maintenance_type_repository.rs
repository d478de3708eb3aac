//! Repository trait for maintenance type reference data.

use crate::domain::entities::{MaintenanceType, NewMaintenanceType};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the service schedule reference data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MaintenanceTypeRepository: Send + Sync {
    /// Adds a maintenance type. Used by seeding and administration, not by
    /// the HTTP API, which exposes the list read-only.
    async fn create(&self, new_type: NewMaintenanceType) -> Result<MaintenanceType, AppError>;

    /// Lists all maintenance types ordered by distance interval ascending.
    async fn list(&self) -> Result<Vec<MaintenanceType>, AppError>;

    /// Finds a maintenance type by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<MaintenanceType>, AppError>;
}
