//! Motorcycle service: upsert and the mileage monotonicity policy.

use std::sync::Arc;

use crate::domain::entities::{Motorcycle, MotorcyclePatch, NewMotorcycle};
use crate::domain::repositories::MotorcycleRepository;
use crate::error::AppError;

/// Result of an odometer update.
#[derive(Debug, Clone, Copy)]
pub struct MileageUpdate {
    pub previous_mileage: i64,
    pub current_mileage: i64,
}

/// Service for the caller's single motorcycle.
pub struct MotorcycleService {
    motorcycles: Arc<dyn MotorcycleRepository>,
}

impl MotorcycleService {
    /// Creates a new motorcycle service.
    pub fn new(motorcycles: Arc<dyn MotorcycleRepository>) -> Self {
        Self { motorcycles }
    }

    /// Returns the caller's motorcycle.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when none has been registered yet.
    pub async fn get_for_user(&self, user_id: i64) -> Result<Motorcycle, AppError> {
        self.motorcycles
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("motorcycle not found"))
    }

    /// Creates the caller's motorcycle or applies a partial update to it.
    ///
    /// On create, `model` and `year` are required and the odometer defaults
    /// to zero. On update, absent fields are unchanged and an odometer value
    /// below the stored reading is rejected.
    pub async fn upsert(
        &self,
        user_id: i64,
        patch: MotorcyclePatch,
    ) -> Result<Motorcycle, AppError> {
        match self.motorcycles.find_by_user(user_id).await? {
            Some(existing) => {
                if let Some(mileage) = patch.current_mileage
                    && mileage < existing.current_mileage
                {
                    return Err(AppError::bad_request(
                        "mileage cannot be lower than the current reading",
                    ));
                }
                self.motorcycles.update(existing.id, patch).await
            }
            None => {
                let model = patch
                    .model
                    .ok_or_else(|| AppError::bad_request("model is required"))?;
                let year = patch
                    .year
                    .ok_or_else(|| AppError::bad_request("year is required"))?;

                self.motorcycles
                    .create(NewMotorcycle {
                        user_id,
                        model,
                        year,
                        license_plate: patch.license_plate.flatten(),
                        chassis: patch.chassis.flatten(),
                        purchase_date: patch.purchase_date.flatten(),
                        current_mileage: patch.current_mileage.unwrap_or(0),
                    })
                    .await
            }
        }
    }

    /// Sets the odometer reading.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no motorcycle is registered and
    /// [`AppError::Validation`] when the new value is below the stored one.
    pub async fn set_mileage(&self, user_id: i64, mileage: i64) -> Result<MileageUpdate, AppError> {
        let motorcycle = self.get_for_user(user_id).await?;

        if mileage < motorcycle.current_mileage {
            return Err(AppError::bad_request(
                "mileage cannot be lower than the current reading",
            ));
        }

        self.motorcycles.set_mileage(motorcycle.id, mileage).await?;

        Ok(MileageUpdate {
            previous_mileage: motorcycle.current_mileage,
            current_mileage: mileage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::{MemMotorcycleRepository, MemStore};

    fn service() -> MotorcycleService {
        let store = MemStore::new();
        MotorcycleService::new(Arc::new(MemMotorcycleRepository::new(store)))
    }

    fn create_patch(model: &str, year: i32) -> MotorcyclePatch {
        MotorcyclePatch {
            model: Some(model.to_string()),
            year: Some(year),
            ..MotorcyclePatch::default()
        }
    }

    #[tokio::test]
    async fn upsert_creates_then_updates() {
        let service = service();

        let created = service.upsert(1, create_patch("CB300F", 2025)).await.unwrap();
        assert_eq!(created.current_mileage, 0);

        let updated = service
            .upsert(
                1,
                MotorcyclePatch {
                    license_plate: Some(Some("ABC-1234".to_string())),
                    ..MotorcyclePatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.model, "CB300F");
        assert_eq!(updated.license_plate.as_deref(), Some("ABC-1234"));
    }

    #[tokio::test]
    async fn upsert_requires_model_and_year_on_create() {
        let service = service();
        let result = service.upsert(1, MotorcyclePatch::default()).await;
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn set_mileage_is_monotonic() {
        let service = service();
        service.upsert(1, create_patch("CB300F", 2025)).await.unwrap();

        let update = service.set_mileage(1, 1200).await.unwrap();
        assert_eq!(update.previous_mileage, 0);
        assert_eq!(update.current_mileage, 1200);

        // Equal value is allowed, lower is not.
        assert!(service.set_mileage(1, 1200).await.is_ok());
        let result = service.set_mileage(1, 1199).await;
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn set_mileage_without_motorcycle_is_not_found() {
        let service = service();
        let result = service.set_mileage(1, 100).await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn upsert_rejects_mileage_regression() {
        let service = service();
        service.upsert(1, create_patch("CB300F", 2025)).await.unwrap();
        service.set_mileage(1, 500).await.unwrap();

        let result = service
            .upsert(
                1,
                MotorcyclePatch {
                    current_mileage: Some(400),
                    ..MotorcyclePatch::default()
                },
            )
            .await;
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }
}
