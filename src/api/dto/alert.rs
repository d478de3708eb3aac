//! DTOs for the alert endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::domain::entities::AlertWithType;

/// Query parameters for the alert list.
///
/// Uses `serde_with` to parse the flag from its query-string form.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct AlertListQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub include_completed: Option<bool>,
}

/// Request to mark one alert completed.
///
/// An absent id deserializes to zero, which the range check rejects.
#[derive(Debug, Deserialize, Validate)]
pub struct CompleteAlertRequest {
    #[serde(default)]
    #[validate(range(min = 1, message = "alert id is required"))]
    pub alert_id: i64,
}

/// Completion result.
#[derive(Debug, Serialize)]
pub struct CompleteAlertResponse {
    pub success: bool,
}

/// Regeneration result carrying the number of alerts created.
#[derive(Debug, Serialize)]
pub struct RegenerateResponse {
    pub success: bool,
    pub alerts_created: u64,
}

/// An alert as returned by the API, joined with its type and the current
/// odometer reading.
#[derive(Debug, Serialize)]
pub struct AlertItem {
    pub id: i64,
    pub maintenance_type_id: i64,
    pub type_name: String,
    pub type_description: Option<String>,
    pub is_critical: bool,
    pub due_date: Option<NaiveDate>,
    pub due_mileage: i64,
    pub current_mileage: i64,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

pub fn alert_to_item(a: AlertWithType) -> AlertItem {
    AlertItem {
        id: a.id,
        maintenance_type_id: a.maintenance_type_id,
        type_name: a.type_name,
        type_description: a.type_description,
        is_critical: a.is_critical,
        due_date: a.due_date,
        due_mileage: a.due_mileage,
        current_mileage: a.current_mileage,
        is_completed: a.is_completed,
        created_at: a.created_at,
    }
}
