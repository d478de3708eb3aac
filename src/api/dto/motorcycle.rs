//! DTOs for the motorcycle endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::Motorcycle;
use crate::error::AppError;

/// Compiled regex for license plate validation: groups of uppercase
/// letters/digits, optionally dash-separated.
static PLATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{2,4}(-[A-Z0-9]{2,4})?$").unwrap());

/// Upsert request for the caller's motorcycle.
///
/// On first save, `model` and `year` are required. Afterwards every field
/// is an optional patch: absent fields stay unchanged, and for the nullable
/// fields an explicit `null` clears the stored value.
#[derive(Debug, Deserialize, Validate)]
pub struct MotorcycleUpsertRequest {
    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub license_plate: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub chassis: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub purchase_date: Option<Option<NaiveDate>>,

    #[validate(range(min = 0))]
    pub current_mileage: Option<i64>,
}

impl MotorcycleUpsertRequest {
    /// Checks the license plate format when one is being set. Kept out of
    /// the derive because the field is a double option.
    pub fn validate_plate(&self) -> Result<(), AppError> {
        if let Some(Some(plate)) = &self.license_plate
            && !PLATE_REGEX.is_match(plate)
        {
            return Err(AppError::bad_request("invalid license plate format"));
        }
        Ok(())
    }
}

/// Upsert result carrying the motorcycle id.
#[derive(Debug, Serialize)]
pub struct UpsertResponse {
    pub success: bool,
    pub id: i64,
}

/// Odometer update request.
#[derive(Debug, Deserialize, Validate)]
pub struct MileageUpdateRequest {
    #[validate(range(min = 0, message = "mileage must not be negative"))]
    pub mileage: i64,
}

/// Odometer update result, echoing both readings.
#[derive(Debug, Serialize)]
pub struct MileageUpdateResponse {
    pub success: bool,
    pub previous_mileage: i64,
    pub current_mileage: i64,
}

/// A motorcycle as returned by the API.
#[derive(Debug, Serialize)]
pub struct MotorcycleItem {
    pub id: i64,
    pub model: String,
    pub year: i32,
    pub license_plate: Option<String>,
    pub chassis: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub current_mileage: i64,
    pub last_update: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub fn motorcycle_to_item(m: Motorcycle) -> MotorcycleItem {
    MotorcycleItem {
        id: m.id,
        model: m.model,
        year: m.year,
        license_plate: m.license_plate,
        chassis: m.chassis,
        purchase_date: m.purchase_date,
        current_mileage: m.current_mileage,
        last_update: m.last_update,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}
