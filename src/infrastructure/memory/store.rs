//! Shared in-memory table storage.

use chrono::Utc;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::entities::{
    Alert, MaintenanceRecord, MaintenanceType, Motorcycle, NewMaintenanceType, User,
};
use crate::error::AppError;

/// The in-memory tables. Row ids are per-table sequences starting at 1,
/// matching the `BIGSERIAL` columns of the PostgreSQL schema.
#[derive(Debug, Default)]
pub(super) struct Tables {
    pub users: Vec<User>,
    pub motorcycles: Vec<Motorcycle>,
    pub maintenance_types: Vec<MaintenanceType>,
    pub records: Vec<MaintenanceRecord>,
    pub alerts: Vec<Alert>,

    pub next_user_id: i64,
    pub next_motorcycle_id: i64,
    pub next_type_id: i64,
    pub next_record_id: i64,
    pub next_alert_id: i64,
}

impl Tables {
    fn new() -> Self {
        Self {
            next_user_id: 1,
            next_motorcycle_id: 1,
            next_type_id: 1,
            next_record_id: 1,
            next_alert_id: 1,
            ..Self::default()
        }
    }
}

/// Process-lifetime in-memory store shared by the `Mem*` repositories.
///
/// Locking discipline: guards are never held across an await point; every
/// repository method takes the lock, works on the tables, and releases it
/// before returning.
pub struct MemStore {
    inner: RwLock<Tables>,
}

impl MemStore {
    /// Creates an empty store.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: RwLock::new(Tables::new()),
        })
    }

    /// Creates a store seeded with the reference service schedule, the same
    /// rows the PostgreSQL migration inserts.
    pub fn with_default_types() -> Arc<Self> {
        let store = Self::new();
        {
            let mut tables = store
                .inner
                .write()
                .expect("fresh store lock cannot be poisoned");
            let now = Utc::now();
            for new_type in default_maintenance_types() {
                let id = tables.next_type_id;
                tables.next_type_id += 1;
                tables.maintenance_types.push(MaintenanceType {
                    id,
                    name: new_type.name,
                    description: new_type.description,
                    interval_km: new_type.interval_km,
                    interval_months: new_type.interval_months,
                    is_critical: new_type.is_critical,
                    created_at: now,
                    updated_at: now,
                });
            }
        }
        store
    }

    pub(super) fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, AppError> {
        self.inner
            .read()
            .map_err(|_| AppError::internal("memory store lock poisoned"))
    }

    pub(super) fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, AppError> {
        self.inner
            .write()
            .map_err(|_| AppError::internal("memory store lock poisoned"))
    }
}

/// The reference service schedule, mirroring the migration seed rows.
pub(super) fn default_maintenance_types() -> Vec<NewMaintenanceType> {
    let entry = |name: &str, description: &str, interval_km: i64, interval_months, is_critical| {
        NewMaintenanceType {
            name: name.to_string(),
            description: Some(description.to_string()),
            interval_km,
            interval_months,
            is_critical,
        }
    };

    vec![
        entry("Oil change", "Replace engine oil", 3000, Some(3), true),
        entry(
            "First service",
            "Full inspection per the factory manual",
            1000,
            None,
            true,
        ),
        entry("Oil filter", "Replace the oil filter", 6000, Some(6), true),
        entry(
            "Spark plug check",
            "Inspect and gap the spark plug",
            6000,
            Some(6),
            false,
        ),
        entry(
            "Spark plug change",
            "Replace the spark plug",
            24000,
            Some(24),
            true,
        ),
        entry(
            "Drive chain service",
            "Check tension and lubricate the drive chain",
            500,
            Some(1),
            true,
        ),
    ]
}
