//! Maintenance type reference data.

use chrono::{DateTime, Utc};

/// A recurring service definition, e.g. an oil change every 3000 km.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MaintenanceType {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Distance interval in kilometres between services of this type.
    pub interval_km: i64,
    /// Optional time interval in months. Only used to derive a due date
    /// once a first record of this type exists.
    pub interval_months: Option<i32>,
    pub is_critical: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for defining a maintenance type.
#[derive(Debug, Clone)]
pub struct NewMaintenanceType {
    pub name: String,
    pub description: Option<String>,
    pub interval_km: i64,
    pub interval_months: Option<i32>,
    pub is_critical: bool,
}
