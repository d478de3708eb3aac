//! Alert service: due-date computation, generation, and completion.

use chrono::Months;
use std::sync::Arc;

use crate::domain::entities::{AlertWithType, NewAlert};
use crate::domain::repositories::{
    AlertRepository, MaintenanceTypeRepository, MotorcycleRepository, RecordRepository,
};
use crate::error::AppError;

/// Service for maintenance alerts.
pub struct AlertService {
    alerts: Arc<dyn AlertRepository>,
    types: Arc<dyn MaintenanceTypeRepository>,
    records: Arc<dyn RecordRepository>,
    motorcycles: Arc<dyn MotorcycleRepository>,
}

impl AlertService {
    /// Creates a new alert service.
    pub fn new(
        alerts: Arc<dyn AlertRepository>,
        types: Arc<dyn MaintenanceTypeRepository>,
        records: Arc<dyn RecordRepository>,
        motorcycles: Arc<dyn MotorcycleRepository>,
    ) -> Self {
        Self {
            alerts,
            types,
            records,
            motorcycles,
        }
    }

    /// Generates missing alerts for a motorcycle, returning how many were
    /// created.
    ///
    /// For each maintenance type without an open alert: the due mileage is
    /// the newest record's mileage plus the type's distance interval, or the
    /// bare interval when the type was never serviced. A due date is only
    /// attached when the type declares a time interval and a prior record
    /// exists to anchor it.
    ///
    /// Each type is computed independently; a second run with no intervening
    /// record creation finds every type covered and creates nothing.
    pub async fn generate_for_motorcycle(&self, motorcycle_id: i64) -> Result<u64, AppError> {
        let types = self.types.list().await?;
        let records = self.records.list_for_motorcycle(motorcycle_id).await?;
        let open = self.alerts.open_for_motorcycle(motorcycle_id).await?;

        let mut created = 0;
        for maintenance_type in &types {
            if open
                .iter()
                .any(|a| a.maintenance_type_id == maintenance_type.id)
            {
                continue;
            }

            // Records arrive newest first, so the first match is the most
            // recent service of this type.
            let last_record = records
                .iter()
                .find(|r| r.maintenance_type_id == maintenance_type.id);

            let due_mileage = match last_record {
                Some(record) => record.mileage + maintenance_type.interval_km,
                None => maintenance_type.interval_km,
            };

            let due_date = match (maintenance_type.interval_months, last_record) {
                (Some(months), Some(record)) if months > 0 => {
                    record.date.checked_add_months(Months::new(months as u32))
                }
                _ => None,
            };

            self.alerts
                .create(NewAlert {
                    motorcycle_id,
                    maintenance_type_id: maintenance_type.id,
                    due_date,
                    due_mileage,
                })
                .await?;
            created += 1;
        }

        if created > 0 {
            tracing::info!(motorcycle_id, created, "generated maintenance alerts");
        }

        Ok(created)
    }

    /// Lists the caller's alerts, open ones by default.
    ///
    /// Returns an empty list when no motorcycle is registered.
    pub async fn list_for_user(
        &self,
        user_id: i64,
        include_completed: bool,
    ) -> Result<Vec<AlertWithType>, AppError> {
        match self.motorcycles.find_by_user(user_id).await? {
            Some(motorcycle) => {
                self.alerts
                    .list_for_motorcycle(motorcycle.id, include_completed)
                    .await
            }
            None => Ok(Vec::new()),
        }
    }

    /// Marks one of the caller's alerts completed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown alert or missing
    /// motorcycle, and [`AppError::Unauthorized`] when the alert belongs to
    /// another motorcycle.
    pub async fn complete(&self, user_id: i64, alert_id: i64) -> Result<(), AppError> {
        let alert = self
            .alerts
            .find_by_id(alert_id)
            .await?
            .ok_or_else(|| AppError::not_found("alert not found"))?;

        let motorcycle = self
            .motorcycles
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("motorcycle not found"))?;

        if alert.motorcycle_id != motorcycle.id {
            return Err(AppError::unauthorized("Unauthorized"));
        }

        self.alerts.mark_completed(alert.id).await?;
        Ok(())
    }

    /// Re-runs generation for the caller's motorcycle.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no motorcycle is registered.
    pub async fn regenerate_for_user(&self, user_id: i64) -> Result<u64, AppError> {
        let motorcycle = self
            .motorcycles
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("motorcycle not found"))?;

        self.generate_for_motorcycle(motorcycle.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{MotorcyclePatch, NewMaintenanceType, NewRecord};
    use crate::domain::repositories::{MaintenanceTypeRepository, RecordRepository};
    use crate::infrastructure::memory::{
        MemAlertRepository, MemMaintenanceTypeRepository, MemMotorcycleRepository,
        MemRecordRepository, MemStore,
    };
    use crate::application::services::MotorcycleService;
    use chrono::NaiveDate;

    struct Fixture {
        service: AlertService,
        types: Arc<MemMaintenanceTypeRepository>,
        records: Arc<MemRecordRepository>,
        alerts: Arc<MemAlertRepository>,
    }

    async fn fixture() -> Fixture {
        let store = MemStore::new();
        let alerts = Arc::new(MemAlertRepository::new(store.clone()));
        let types = Arc::new(MemMaintenanceTypeRepository::new(store.clone()));
        let records = Arc::new(MemRecordRepository::new(store.clone()));
        let motorcycles = Arc::new(MemMotorcycleRepository::new(store));

        // One motorcycle at 0 km for user 1.
        MotorcycleService::new(motorcycles.clone())
            .upsert(
                1,
                MotorcyclePatch {
                    model: Some("CB300F".to_string()),
                    year: Some(2025),
                    ..MotorcyclePatch::default()
                },
            )
            .await
            .unwrap();

        Fixture {
            service: AlertService::new(alerts.clone(), types.clone(), records.clone(), motorcycles),
            types,
            records,
            alerts,
        }
    }

    fn oil_change(interval_months: Option<i32>) -> NewMaintenanceType {
        NewMaintenanceType {
            name: "Oil change".to_string(),
            description: None,
            interval_km: 3000,
            interval_months,
            is_critical: true,
        }
    }

    #[tokio::test]
    async fn first_generation_dues_at_the_bare_interval() {
        let fx = fixture().await;
        fx.types.create(oil_change(None)).await.unwrap();

        let created = fx.service.generate_for_motorcycle(1).await.unwrap();
        assert_eq!(created, 1);

        let alerts = fx.service.list_for_user(1, false).await.unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].due_mileage, 3000);
        assert_eq!(alerts[0].due_date, None);
    }

    #[tokio::test]
    async fn generation_is_idempotent_without_new_records() {
        let fx = fixture().await;
        fx.types.create(oil_change(Some(3))).await.unwrap();

        assert_eq!(fx.service.generate_for_motorcycle(1).await.unwrap(), 1);
        assert_eq!(fx.service.generate_for_motorcycle(1).await.unwrap(), 0);
        assert_eq!(fx.service.generate_for_motorcycle(1).await.unwrap(), 0);

        let open = fx.alerts.open_for_motorcycle(1).await.unwrap();
        assert_eq!(open.len(), 1);
    }

    #[tokio::test]
    async fn due_values_anchor_on_the_newest_record() {
        let fx = fixture().await;
        let ty = fx.types.create(oil_change(Some(3))).await.unwrap();

        for (day, mileage) in [(10, 2800), (20, 3200)] {
            fx.records
                .create(NewRecord {
                    motorcycle_id: 1,
                    maintenance_type_id: ty.id,
                    date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
                    mileage,
                    cost: None,
                    notes: None,
                    parts_replaced: None,
                    service_provider: None,
                })
                .await
                .unwrap();
        }

        fx.service.generate_for_motorcycle(1).await.unwrap();
        let alerts = fx.service.list_for_user(1, false).await.unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].due_mileage, 6200);
        assert_eq!(
            alerts[0].due_date,
            Some(NaiveDate::from_ymd_opt(2025, 6, 20).unwrap())
        );
    }

    #[tokio::test]
    async fn time_interval_without_prior_record_has_no_due_date() {
        let fx = fixture().await;
        fx.types.create(oil_change(Some(3))).await.unwrap();

        fx.service.generate_for_motorcycle(1).await.unwrap();
        let alerts = fx.service.list_for_user(1, false).await.unwrap();
        assert_eq!(alerts[0].due_date, None);
    }

    #[tokio::test]
    async fn completing_an_alert_frees_its_type_for_regeneration() {
        let fx = fixture().await;
        fx.types.create(oil_change(None)).await.unwrap();

        fx.service.generate_for_motorcycle(1).await.unwrap();
        let alerts = fx.service.list_for_user(1, false).await.unwrap();
        fx.service.complete(1, alerts[0].id).await.unwrap();

        assert!(fx.service.list_for_user(1, false).await.unwrap().is_empty());
        assert_eq!(fx.service.generate_for_motorcycle(1).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn completing_an_unknown_alert_is_not_found() {
        let fx = fixture().await;
        let result = fx.service.complete(1, 999).await;
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn completing_a_foreign_alert_is_unauthorized() {
        let fx = fixture().await;
        fx.types.create(oil_change(None)).await.unwrap();

        // A second user with their own motorcycle and alert.
        let store_alert = fx
            .alerts
            .create(NewAlert {
                motorcycle_id: 2,
                maintenance_type_id: 1,
                due_date: None,
                due_mileage: 3000,
            })
            .await
            .unwrap();

        let result = fx.service.complete(1, store_alert.id).await;
        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
    }
}
