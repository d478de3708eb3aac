//! Alert entity: a pending maintenance reminder.

use chrono::{DateTime, NaiveDate, Utc};

/// A reminder that a maintenance type is due at a mileage and optional date.
///
/// Alerts transition open to completed and are never deleted by the normal
/// flow. At most one open alert exists per (motorcycle, type) pair; the
/// generation routine enforces this with a skip-if-exists check.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Alert {
    pub id: i64,
    pub motorcycle_id: i64,
    pub maintenance_type_id: i64,
    pub due_date: Option<NaiveDate>,
    pub due_mileage: i64,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Alert {
    /// Returns true if the alert is still waiting on a service.
    pub fn is_open(&self) -> bool {
        !self.is_completed
    }
}

/// Input data for creating an open alert.
#[derive(Debug, Clone)]
pub struct NewAlert {
    pub motorcycle_id: i64,
    pub maintenance_type_id: i64,
    pub due_date: Option<NaiveDate>,
    pub due_mileage: i64,
}

/// An alert joined with its type and the motorcycle's current mileage,
/// as listed by the API.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AlertWithType {
    pub id: i64,
    pub motorcycle_id: i64,
    pub maintenance_type_id: i64,
    pub due_date: Option<NaiveDate>,
    pub due_mileage: i64,
    pub is_completed: bool,
    pub type_name: String,
    pub type_description: Option<String>,
    pub is_critical: bool,
    pub current_mileage: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
