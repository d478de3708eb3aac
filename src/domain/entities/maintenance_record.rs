//! Maintenance record entity: a logged, completed service event.

use chrono::{DateTime, NaiveDate, Utc};

/// A completed service event for a motorcycle.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MaintenanceRecord {
    pub id: i64,
    pub motorcycle_id: i64,
    pub maintenance_type_id: i64,
    pub date: NaiveDate,
    /// Odometer reading at the time of service, in kilometres.
    pub mileage: i64,
    pub cost: Option<f64>,
    pub notes: Option<String>,
    pub parts_replaced: Option<String>,
    pub service_provider: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for logging a maintenance record.
#[derive(Debug, Clone)]
pub struct NewRecord {
    pub motorcycle_id: i64,
    pub maintenance_type_id: i64,
    pub date: NaiveDate,
    pub mileage: i64,
    pub cost: Option<f64>,
    pub notes: Option<String>,
    pub parts_replaced: Option<String>,
    pub service_provider: Option<String>,
}

/// A record joined with its maintenance type, as listed by the API.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RecordWithType {
    pub id: i64,
    pub motorcycle_id: i64,
    pub maintenance_type_id: i64,
    pub date: NaiveDate,
    pub mileage: i64,
    pub cost: Option<f64>,
    pub notes: Option<String>,
    pub parts_replaced: Option<String>,
    pub service_provider: Option<String>,
    pub type_name: String,
    pub type_description: Option<String>,
    pub is_critical: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Aggregate maintenance statistics for one motorcycle.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct MaintenanceStats {
    pub total_count: i64,
    pub total_cost: f64,
    pub average_cost: f64,
    pub last_maintenance_date: Option<NaiveDate>,
}

impl MaintenanceStats {
    /// The empty aggregate, returned when no motorcycle or records exist.
    pub fn empty() -> Self {
        Self {
            total_count: 0,
            total_cost: 0.0,
            average_cost: 0.0,
            last_maintenance_date: None,
        }
    }
}
