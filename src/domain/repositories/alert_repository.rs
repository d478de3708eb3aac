//! Repository trait for maintenance alert data access.

use crate::domain::entities::{Alert, AlertWithType, NewAlert};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for maintenance alerts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AlertRepository: Send + Sync {
    /// Creates an open alert.
    async fn create(&self, new_alert: NewAlert) -> Result<Alert, AppError>;

    /// Finds an alert by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Alert>, AppError>;

    /// Lists a motorcycle's alerts joined with their maintenance type and
    /// the current odometer reading, ordered by due mileage ascending.
    ///
    /// Completed alerts are filtered out unless `include_completed` is set.
    async fn list_for_motorcycle(
        &self,
        motorcycle_id: i64,
        include_completed: bool,
    ) -> Result<Vec<AlertWithType>, AppError>;

    /// Lists a motorcycle's open alerts, unjoined. Used by the generation
    /// routine's skip-if-exists check.
    async fn open_for_motorcycle(&self, motorcycle_id: i64) -> Result<Vec<Alert>, AppError>;

    /// Marks one alert completed.
    ///
    /// Returns `Ok(true)` if the alert existed, `Ok(false)` otherwise.
    async fn mark_completed(&self, id: i64) -> Result<bool, AppError>;

    /// Marks every open alert of one maintenance type completed for a
    /// motorcycle, returning how many were closed.
    async fn complete_open_for_type(
        &self,
        motorcycle_id: i64,
        maintenance_type_id: i64,
    ) -> Result<u64, AppError>;
}
