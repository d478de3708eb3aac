//! Repository trait implementations over [`MemStore`].

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::domain::entities::{
    Alert, AlertWithType, MaintenanceRecord, MaintenanceStats, MaintenanceType, Motorcycle,
    MotorcyclePatch, NewAlert, NewMaintenanceType, NewMotorcycle, NewRecord, NewUser,
    RecordWithType, User,
};
use crate::domain::repositories::{
    AlertRepository, MaintenanceTypeRepository, MotorcycleRepository, RecordRepository,
    StatsRepository, UserRepository,
};
use crate::error::AppError;

use super::store::MemStore;

/// In-memory repository for user accounts.
pub struct MemUserRepository {
    store: Arc<MemStore>,
}

impl MemUserRepository {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for MemUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut tables = self.store.write()?;

        if tables.users.iter().any(|u| u.username == new_user.username) {
            return Err(AppError::bad_request(format!(
                "username '{}' is already taken",
                new_user.username
            )));
        }

        let now = Utc::now();
        let user = User {
            id: tables.next_user_id,
            username: new_user.username,
            password_hash: new_user.password_hash,
            created_at: now,
            updated_at: now,
        };
        tables.next_user_id += 1;
        tables.users.push(user.clone());

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let tables = self.store.read()?;
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }

    async fn update_password(&self, id: i64, password_hash: &str) -> Result<bool, AppError> {
        let mut tables = self.store.write()?;
        match tables.users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.password_hash = password_hash.to_string();
                user.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let tables = self.store.read()?;
        Ok(tables.users.clone())
    }
}

/// In-memory repository for the tracked motorcycle.
pub struct MemMotorcycleRepository {
    store: Arc<MemStore>,
}

impl MemMotorcycleRepository {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MotorcycleRepository for MemMotorcycleRepository {
    async fn create(&self, new_motorcycle: NewMotorcycle) -> Result<Motorcycle, AppError> {
        let mut tables = self.store.write()?;

        let now = Utc::now();
        let motorcycle = Motorcycle {
            id: tables.next_motorcycle_id,
            user_id: new_motorcycle.user_id,
            model: new_motorcycle.model,
            year: new_motorcycle.year,
            license_plate: new_motorcycle.license_plate,
            chassis: new_motorcycle.chassis,
            purchase_date: new_motorcycle.purchase_date,
            current_mileage: new_motorcycle.current_mileage,
            last_update: now,
            created_at: now,
            updated_at: now,
        };
        tables.next_motorcycle_id += 1;
        tables.motorcycles.push(motorcycle.clone());

        Ok(motorcycle)
    }

    async fn find_by_user(&self, user_id: i64) -> Result<Option<Motorcycle>, AppError> {
        let tables = self.store.read()?;
        Ok(tables
            .motorcycles
            .iter()
            .filter(|m| m.user_id == user_id)
            .max_by_key(|m| m.id)
            .cloned())
    }

    async fn update(&self, id: i64, patch: MotorcyclePatch) -> Result<Motorcycle, AppError> {
        let mut tables = self.store.write()?;
        let motorcycle = tables
            .motorcycles
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| AppError::not_found("motorcycle not found"))?;

        let now = Utc::now();
        if let Some(model) = patch.model {
            motorcycle.model = model;
        }
        if let Some(year) = patch.year {
            motorcycle.year = year;
        }
        if let Some(license_plate) = patch.license_plate {
            motorcycle.license_plate = license_plate;
        }
        if let Some(chassis) = patch.chassis {
            motorcycle.chassis = chassis;
        }
        if let Some(purchase_date) = patch.purchase_date {
            motorcycle.purchase_date = purchase_date;
        }
        if let Some(current_mileage) = patch.current_mileage {
            motorcycle.current_mileage = current_mileage;
            motorcycle.last_update = now;
        }
        motorcycle.updated_at = now;

        Ok(motorcycle.clone())
    }

    async fn set_mileage(&self, id: i64, mileage: i64) -> Result<bool, AppError> {
        let mut tables = self.store.write()?;
        match tables.motorcycles.iter_mut().find(|m| m.id == id) {
            Some(motorcycle) => {
                let now = Utc::now();
                motorcycle.current_mileage = mileage;
                motorcycle.last_update = now;
                motorcycle.updated_at = now;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// In-memory repository for service schedule reference data.
pub struct MemMaintenanceTypeRepository {
    store: Arc<MemStore>,
}

impl MemMaintenanceTypeRepository {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MaintenanceTypeRepository for MemMaintenanceTypeRepository {
    async fn create(&self, new_type: NewMaintenanceType) -> Result<MaintenanceType, AppError> {
        let mut tables = self.store.write()?;

        let now = Utc::now();
        let maintenance_type = MaintenanceType {
            id: tables.next_type_id,
            name: new_type.name,
            description: new_type.description,
            interval_km: new_type.interval_km,
            interval_months: new_type.interval_months,
            is_critical: new_type.is_critical,
            created_at: now,
            updated_at: now,
        };
        tables.next_type_id += 1;
        tables.maintenance_types.push(maintenance_type.clone());

        Ok(maintenance_type)
    }

    async fn list(&self) -> Result<Vec<MaintenanceType>, AppError> {
        let tables = self.store.read()?;
        let mut types = tables.maintenance_types.clone();
        types.sort_by_key(|t| (t.interval_km, t.id));
        Ok(types)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<MaintenanceType>, AppError> {
        let tables = self.store.read()?;
        Ok(tables.maintenance_types.iter().find(|t| t.id == id).cloned())
    }
}

/// In-memory repository for logged service events.
pub struct MemRecordRepository {
    store: Arc<MemStore>,
}

impl MemRecordRepository {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RecordRepository for MemRecordRepository {
    async fn create(&self, new_record: NewRecord) -> Result<MaintenanceRecord, AppError> {
        let mut tables = self.store.write()?;

        let now = Utc::now();
        let record = MaintenanceRecord {
            id: tables.next_record_id,
            motorcycle_id: new_record.motorcycle_id,
            maintenance_type_id: new_record.maintenance_type_id,
            date: new_record.date,
            mileage: new_record.mileage,
            cost: new_record.cost,
            notes: new_record.notes,
            parts_replaced: new_record.parts_replaced,
            service_provider: new_record.service_provider,
            created_at: now,
            updated_at: now,
        };
        tables.next_record_id += 1;
        tables.records.push(record.clone());

        Ok(record)
    }

    async fn list_for_motorcycle(
        &self,
        motorcycle_id: i64,
    ) -> Result<Vec<MaintenanceRecord>, AppError> {
        let tables = self.store.read()?;
        let mut records: Vec<MaintenanceRecord> = tables
            .records
            .iter()
            .filter(|r| r.motorcycle_id == motorcycle_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| (b.date, b.id).cmp(&(a.date, a.id)));
        Ok(records)
    }

    async fn list_with_type(&self, motorcycle_id: i64) -> Result<Vec<RecordWithType>, AppError> {
        let tables = self.store.read()?;
        let mut records = Vec::new();
        for record in tables
            .records
            .iter()
            .filter(|r| r.motorcycle_id == motorcycle_id)
        {
            let maintenance_type = tables
                .maintenance_types
                .iter()
                .find(|t| t.id == record.maintenance_type_id)
                .ok_or_else(|| AppError::internal("record references missing type"))?;

            records.push(RecordWithType {
                id: record.id,
                motorcycle_id: record.motorcycle_id,
                maintenance_type_id: record.maintenance_type_id,
                date: record.date,
                mileage: record.mileage,
                cost: record.cost,
                notes: record.notes.clone(),
                parts_replaced: record.parts_replaced.clone(),
                service_provider: record.service_provider.clone(),
                type_name: maintenance_type.name.clone(),
                type_description: maintenance_type.description.clone(),
                is_critical: maintenance_type.is_critical,
                created_at: record.created_at,
                updated_at: record.updated_at,
            });
        }
        records.sort_by(|a, b| (b.date, b.id).cmp(&(a.date, a.id)));
        Ok(records)
    }
}

/// In-memory repository for maintenance alerts.
pub struct MemAlertRepository {
    store: Arc<MemStore>,
}

impl MemAlertRepository {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl AlertRepository for MemAlertRepository {
    async fn create(&self, new_alert: NewAlert) -> Result<Alert, AppError> {
        let mut tables = self.store.write()?;

        let now = Utc::now();
        let alert = Alert {
            id: tables.next_alert_id,
            motorcycle_id: new_alert.motorcycle_id,
            maintenance_type_id: new_alert.maintenance_type_id,
            due_date: new_alert.due_date,
            due_mileage: new_alert.due_mileage,
            is_completed: false,
            created_at: now,
            updated_at: now,
        };
        tables.next_alert_id += 1;
        tables.alerts.push(alert.clone());

        Ok(alert)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Alert>, AppError> {
        let tables = self.store.read()?;
        Ok(tables.alerts.iter().find(|a| a.id == id).cloned())
    }

    async fn list_for_motorcycle(
        &self,
        motorcycle_id: i64,
        include_completed: bool,
    ) -> Result<Vec<AlertWithType>, AppError> {
        let tables = self.store.read()?;

        let current_mileage = tables
            .motorcycles
            .iter()
            .find(|m| m.id == motorcycle_id)
            .map(|m| m.current_mileage)
            .ok_or_else(|| AppError::internal("alert references missing motorcycle"))?;

        let mut alerts = Vec::new();
        for alert in tables.alerts.iter().filter(|a| {
            a.motorcycle_id == motorcycle_id && (include_completed || !a.is_completed)
        }) {
            let maintenance_type = tables
                .maintenance_types
                .iter()
                .find(|t| t.id == alert.maintenance_type_id)
                .ok_or_else(|| AppError::internal("alert references missing type"))?;

            alerts.push(AlertWithType {
                id: alert.id,
                motorcycle_id: alert.motorcycle_id,
                maintenance_type_id: alert.maintenance_type_id,
                due_date: alert.due_date,
                due_mileage: alert.due_mileage,
                is_completed: alert.is_completed,
                type_name: maintenance_type.name.clone(),
                type_description: maintenance_type.description.clone(),
                is_critical: maintenance_type.is_critical,
                current_mileage,
                created_at: alert.created_at,
                updated_at: alert.updated_at,
            });
        }
        alerts.sort_by_key(|a| (a.due_mileage, a.id));
        Ok(alerts)
    }

    async fn open_for_motorcycle(&self, motorcycle_id: i64) -> Result<Vec<Alert>, AppError> {
        let tables = self.store.read()?;
        Ok(tables
            .alerts
            .iter()
            .filter(|a| a.motorcycle_id == motorcycle_id && !a.is_completed)
            .cloned()
            .collect())
    }

    async fn mark_completed(&self, id: i64) -> Result<bool, AppError> {
        let mut tables = self.store.write()?;
        match tables.alerts.iter_mut().find(|a| a.id == id) {
            Some(alert) => {
                alert.is_completed = true;
                alert.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn complete_open_for_type(
        &self,
        motorcycle_id: i64,
        maintenance_type_id: i64,
    ) -> Result<u64, AppError> {
        let mut tables = self.store.write()?;
        let now = Utc::now();
        let mut completed = 0;
        for alert in tables.alerts.iter_mut().filter(|a| {
            a.motorcycle_id == motorcycle_id
                && a.maintenance_type_id == maintenance_type_id
                && !a.is_completed
        }) {
            alert.is_completed = true;
            alert.updated_at = now;
            completed += 1;
        }
        Ok(completed)
    }
}

/// In-memory repository for aggregate maintenance statistics.
pub struct MemStatsRepository {
    store: Arc<MemStore>,
}

impl MemStatsRepository {
    pub fn new(store: Arc<MemStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl StatsRepository for MemStatsRepository {
    async fn maintenance_stats(&self, motorcycle_id: i64) -> Result<MaintenanceStats, AppError> {
        let tables = self.store.read()?;

        let records: Vec<&MaintenanceRecord> = tables
            .records
            .iter()
            .filter(|r| r.motorcycle_id == motorcycle_id)
            .collect();

        let costs: Vec<f64> = records.iter().filter_map(|r| r.cost).collect();
        let total_cost: f64 = costs.iter().sum();
        let average_cost = if costs.is_empty() {
            0.0
        } else {
            total_cost / costs.len() as f64
        };

        Ok(MaintenanceStats {
            total_count: records.len() as i64,
            total_cost,
            average_cost,
            last_maintenance_date: records.iter().map(|r| r.date).max(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(motorcycle_id: i64, date: NaiveDate, mileage: i64, cost: Option<f64>) -> NewRecord {
        NewRecord {
            motorcycle_id,
            maintenance_type_id: 1,
            date,
            mileage,
            cost,
            notes: None,
            parts_replaced: None,
            service_provider: None,
        }
    }

    #[tokio::test]
    async fn user_ids_are_sequential_and_usernames_unique() {
        let store = MemStore::new();
        let repo = MemUserRepository::new(store);

        let first = repo
            .create(NewUser {
                username: "alice".into(),
                password_hash: "h1".into(),
            })
            .await
            .unwrap();
        let second = repo
            .create(NewUser {
                username: "bob".into(),
                password_hash: "h2".into(),
            })
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let duplicate = repo
            .create(NewUser {
                username: "alice".into(),
                password_hash: "h3".into(),
            })
            .await;
        assert!(matches!(duplicate, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn records_are_listed_most_recent_first() {
        let store = MemStore::with_default_types();
        let repo = MemRecordRepository::new(store);

        let d = |day| NaiveDate::from_ymd_opt(2025, 5, day).unwrap();
        repo.create(record(1, d(1), 500, None)).await.unwrap();
        repo.create(record(1, d(20), 1500, None)).await.unwrap();
        repo.create(record(1, d(10), 1000, None)).await.unwrap();

        let records = repo.list_for_motorcycle(1).await.unwrap();
        let dates: Vec<NaiveDate> = records.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![d(20), d(10), d(1)]);
    }

    #[tokio::test]
    async fn stats_ignore_missing_costs_in_averages() {
        let store = MemStore::with_default_types();
        let repo = MemRecordRepository::new(store.clone());
        let stats_repo = MemStatsRepository::new(store);

        let d = |day| NaiveDate::from_ymd_opt(2025, 5, day).unwrap();
        repo.create(record(1, d(1), 500, Some(100.0))).await.unwrap();
        repo.create(record(1, d(2), 700, None)).await.unwrap();
        repo.create(record(1, d(3), 900, Some(50.0))).await.unwrap();

        let stats = stats_repo.maintenance_stats(1).await.unwrap();
        assert_eq!(stats.total_count, 3);
        assert_eq!(stats.total_cost, 150.0);
        assert_eq!(stats.average_cost, 75.0);
        assert_eq!(stats.last_maintenance_date, Some(d(3)));
    }
}
