//! Repository trait for maintenance statistics.

use crate::domain::entities::MaintenanceStats;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for aggregate maintenance statistics.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Returns count, total and average cost, and the latest service date
    /// for one motorcycle. Records without a cost contribute to the count
    /// but not to the cost aggregates.
    async fn maintenance_stats(&self, motorcycle_id: i64) -> Result<MaintenanceStats, AppError>;
}
