//! PostgreSQL implementation of the alert repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Alert, AlertWithType, NewAlert};
use crate::domain::repositories::AlertRepository;
use crate::error::AppError;

const ALERT_COLUMNS: &str = "id, motorcycle_id, maintenance_type_id, due_date, \
     due_mileage, is_completed, created_at, updated_at";

/// PostgreSQL repository for maintenance alerts.
pub struct PgAlertRepository {
    pool: Arc<PgPool>,
}

impl PgAlertRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlertRepository for PgAlertRepository {
    async fn create(&self, new_alert: NewAlert) -> Result<Alert, AppError> {
        let alert = sqlx::query_as::<_, Alert>(&format!(
            r#"
            INSERT INTO alerts (
                motorcycle_id, maintenance_type_id, due_date, due_mileage, is_completed
            )
            VALUES ($1, $2, $3, $4, FALSE)
            RETURNING {ALERT_COLUMNS}
            "#
        ))
        .bind(new_alert.motorcycle_id)
        .bind(new_alert.maintenance_type_id)
        .bind(new_alert.due_date)
        .bind(new_alert.due_mileage)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(alert)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Alert>, AppError> {
        let alert = sqlx::query_as::<_, Alert>(&format!(
            r#"
            SELECT {ALERT_COLUMNS}
            FROM alerts
            WHERE id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(alert)
    }

    async fn list_for_motorcycle(
        &self,
        motorcycle_id: i64,
        include_completed: bool,
    ) -> Result<Vec<AlertWithType>, AppError> {
        let alerts = sqlx::query_as::<_, AlertWithType>(
            r#"
            SELECT
                a.id, a.motorcycle_id, a.maintenance_type_id, a.due_date,
                a.due_mileage, a.is_completed, a.created_at, a.updated_at,
                mt.name AS type_name,
                mt.description AS type_description,
                mt.is_critical,
                m.current_mileage
            FROM alerts a
            JOIN maintenance_types mt ON mt.id = a.maintenance_type_id
            JOIN motorcycles m ON m.id = a.motorcycle_id
            WHERE a.motorcycle_id = $1
              AND ($2 OR NOT a.is_completed)
            ORDER BY a.due_mileage ASC, a.id ASC
            "#,
        )
        .bind(motorcycle_id)
        .bind(include_completed)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(alerts)
    }

    async fn open_for_motorcycle(&self, motorcycle_id: i64) -> Result<Vec<Alert>, AppError> {
        let alerts = sqlx::query_as::<_, Alert>(&format!(
            r#"
            SELECT {ALERT_COLUMNS}
            FROM alerts
            WHERE motorcycle_id = $1 AND NOT is_completed
            ORDER BY id ASC
            "#
        ))
        .bind(motorcycle_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(alerts)
    }

    async fn mark_completed(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE alerts
            SET is_completed = TRUE, updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn complete_open_for_type(
        &self,
        motorcycle_id: i64,
        maintenance_type_id: i64,
    ) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE alerts
            SET is_completed = TRUE, updated_at = now()
            WHERE motorcycle_id = $1
              AND maintenance_type_id = $2
              AND NOT is_completed
            "#,
        )
        .bind(motorcycle_id)
        .bind(maintenance_type_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }
}
