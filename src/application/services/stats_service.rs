//! Maintenance statistics service.

use std::sync::Arc;

use crate::domain::entities::MaintenanceStats;
use crate::domain::repositories::{MotorcycleRepository, StatsRepository};
use crate::error::AppError;

/// Service for aggregate maintenance statistics.
pub struct StatsService {
    stats: Arc<dyn StatsRepository>,
    motorcycles: Arc<dyn MotorcycleRepository>,
}

impl StatsService {
    /// Creates a new statistics service.
    pub fn new(stats: Arc<dyn StatsRepository>, motorcycles: Arc<dyn MotorcycleRepository>) -> Self {
        Self { stats, motorcycles }
    }

    /// Returns the caller's maintenance statistics, or the empty aggregate
    /// when no motorcycle is registered yet.
    pub async fn get_for_user(&self, user_id: i64) -> Result<MaintenanceStats, AppError> {
        match self.motorcycles.find_by_user(user_id).await? {
            Some(motorcycle) => self.stats.maintenance_stats(motorcycle.id).await,
            None => Ok(MaintenanceStats::empty()),
        }
    }
}
