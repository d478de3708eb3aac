//! PostgreSQL implementation of the maintenance type repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{MaintenanceType, NewMaintenanceType};
use crate::domain::repositories::MaintenanceTypeRepository;
use crate::error::AppError;

const TYPE_COLUMNS: &str =
    "id, name, description, interval_km, interval_months, is_critical, created_at, updated_at";

/// PostgreSQL repository for service schedule reference data.
pub struct PgMaintenanceTypeRepository {
    pool: Arc<PgPool>,
}

impl PgMaintenanceTypeRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MaintenanceTypeRepository for PgMaintenanceTypeRepository {
    async fn create(&self, new_type: NewMaintenanceType) -> Result<MaintenanceType, AppError> {
        let maintenance_type = sqlx::query_as::<_, MaintenanceType>(&format!(
            r#"
            INSERT INTO maintenance_types (
                name, description, interval_km, interval_months, is_critical
            )
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {TYPE_COLUMNS}
            "#
        ))
        .bind(&new_type.name)
        .bind(&new_type.description)
        .bind(new_type.interval_km)
        .bind(new_type.interval_months)
        .bind(new_type.is_critical)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(maintenance_type)
    }

    async fn list(&self) -> Result<Vec<MaintenanceType>, AppError> {
        let types = sqlx::query_as::<_, MaintenanceType>(&format!(
            r#"
            SELECT {TYPE_COLUMNS}
            FROM maintenance_types
            ORDER BY interval_km ASC, id ASC
            "#
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(types)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<MaintenanceType>, AppError> {
        let maintenance_type = sqlx::query_as::<_, MaintenanceType>(&format!(
            r#"
            SELECT {TYPE_COLUMNS}
            FROM maintenance_types
            WHERE id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(maintenance_type)
    }
}
