//! Motorcycle entity and its update types.

use chrono::{DateTime, NaiveDate, Utc};

/// The tracked motorcycle. One per user by convention, not by schema.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Motorcycle {
    pub id: i64,
    pub user_id: i64,
    pub model: String,
    pub year: i32,
    pub license_plate: Option<String>,
    pub chassis: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    /// Odometer reading in kilometres. Never decreases.
    pub current_mileage: i64,
    /// When the odometer reading was last touched.
    pub last_update: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for registering a motorcycle.
#[derive(Debug, Clone)]
pub struct NewMotorcycle {
    pub user_id: i64,
    pub model: String,
    pub year: i32,
    pub license_plate: Option<String>,
    pub chassis: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub current_mileage: i64,
}

/// Partial update for an existing motorcycle.
///
/// `None` fields are left unchanged. For the nullable columns,
/// `Some(None)` clears the value and `Some(Some(v))` sets it.
#[derive(Debug, Clone, Default)]
pub struct MotorcyclePatch {
    pub model: Option<String>,
    pub year: Option<i32>,
    pub license_plate: Option<Option<String>>,
    pub chassis: Option<Option<String>>,
    pub purchase_date: Option<Option<NaiveDate>>,
    pub current_mileage: Option<i64>,
}
