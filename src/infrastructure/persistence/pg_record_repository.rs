//! PostgreSQL implementation of the maintenance record repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{MaintenanceRecord, NewRecord, RecordWithType};
use crate::domain::repositories::RecordRepository;
use crate::error::AppError;

const RECORD_COLUMNS: &str = "id, motorcycle_id, maintenance_type_id, date, mileage, \
     cost, notes, parts_replaced, service_provider, created_at, updated_at";

/// PostgreSQL repository for logged service events.
pub struct PgRecordRepository {
    pool: Arc<PgPool>,
}

impl PgRecordRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordRepository for PgRecordRepository {
    async fn create(&self, new_record: NewRecord) -> Result<MaintenanceRecord, AppError> {
        let record = sqlx::query_as::<_, MaintenanceRecord>(&format!(
            r#"
            INSERT INTO maintenance_records (
                motorcycle_id, maintenance_type_id, date, mileage,
                cost, notes, parts_replaced, service_provider
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {RECORD_COLUMNS}
            "#
        ))
        .bind(new_record.motorcycle_id)
        .bind(new_record.maintenance_type_id)
        .bind(new_record.date)
        .bind(new_record.mileage)
        .bind(new_record.cost)
        .bind(&new_record.notes)
        .bind(&new_record.parts_replaced)
        .bind(&new_record.service_provider)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn list_for_motorcycle(
        &self,
        motorcycle_id: i64,
    ) -> Result<Vec<MaintenanceRecord>, AppError> {
        let records = sqlx::query_as::<_, MaintenanceRecord>(&format!(
            r#"
            SELECT {RECORD_COLUMNS}
            FROM maintenance_records
            WHERE motorcycle_id = $1
            ORDER BY date DESC, id DESC
            "#
        ))
        .bind(motorcycle_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(records)
    }

    async fn list_with_type(&self, motorcycle_id: i64) -> Result<Vec<RecordWithType>, AppError> {
        let records = sqlx::query_as::<_, RecordWithType>(
            r#"
            SELECT
                mr.id, mr.motorcycle_id, mr.maintenance_type_id, mr.date,
                mr.mileage, mr.cost, mr.notes, mr.parts_replaced,
                mr.service_provider, mr.created_at, mr.updated_at,
                mt.name AS type_name,
                mt.description AS type_description,
                mt.is_critical
            FROM maintenance_records mr
            JOIN maintenance_types mt ON mt.id = mr.maintenance_type_id
            WHERE mr.motorcycle_id = $1
            ORDER BY mr.date DESC, mr.id DESC
            "#,
        )
        .bind(motorcycle_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(records)
    }
}
