//! DTOs for the statistics endpoint.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::MaintenanceStats;

/// Aggregate maintenance statistics for the caller's motorcycle.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_count: i64,
    pub total_cost: f64,
    pub average_cost: f64,
    pub last_maintenance_date: Option<NaiveDate>,
}

pub fn stats_to_response(s: MaintenanceStats) -> StatsResponse {
    StatsResponse {
        total_count: s.total_count,
        total_cost: s.total_cost,
        average_cost: s.average_cost,
        last_maintenance_date: s.last_maintenance_date,
    }
}
