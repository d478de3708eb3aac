//! DTOs for maintenance records and the type reference list.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{MaintenanceType, RecordWithType};

/// Request to log a completed service event.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRecordRequest {
    #[serde(default)]
    #[validate(range(min = 1, message = "maintenance type is required"))]
    pub maintenance_type_id: i64,

    pub date: NaiveDate,

    #[validate(range(min = 0, message = "mileage must not be negative"))]
    pub mileage: i64,

    #[validate(range(min = 0.0, message = "cost must not be negative"))]
    pub cost: Option<f64>,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,

    #[validate(length(max = 500))]
    pub parts_replaced: Option<String>,

    #[validate(length(max = 200))]
    pub service_provider: Option<String>,
}

/// Creation result carrying the record id.
#[derive(Debug, Serialize)]
pub struct CreateRecordResponse {
    pub success: bool,
    pub id: i64,
}

/// A maintenance record as returned by the API, joined with its type.
#[derive(Debug, Serialize)]
pub struct RecordItem {
    pub id: i64,
    pub maintenance_type_id: i64,
    pub type_name: String,
    pub type_description: Option<String>,
    pub is_critical: bool,
    pub date: NaiveDate,
    pub mileage: i64,
    pub cost: Option<f64>,
    pub notes: Option<String>,
    pub parts_replaced: Option<String>,
    pub service_provider: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub fn record_to_item(r: RecordWithType) -> RecordItem {
    RecordItem {
        id: r.id,
        maintenance_type_id: r.maintenance_type_id,
        type_name: r.type_name,
        type_description: r.type_description,
        is_critical: r.is_critical,
        date: r.date,
        mileage: r.mileage,
        cost: r.cost,
        notes: r.notes,
        parts_replaced: r.parts_replaced,
        service_provider: r.service_provider,
        created_at: r.created_at,
    }
}

/// A maintenance type as returned by the API.
#[derive(Debug, Serialize)]
pub struct MaintenanceTypeItem {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub interval_km: i64,
    pub interval_months: Option<i32>,
    pub is_critical: bool,
}

pub fn maintenance_type_to_item(t: MaintenanceType) -> MaintenanceTypeItem {
    MaintenanceTypeItem {
        id: t.id,
        name: t.name,
        description: t.description,
        interval_km: t.interval_km,
        interval_months: t.interval_months,
        is_critical: t.is_critical,
    }
}
