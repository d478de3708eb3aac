//! PostgreSQL implementation of the motorcycle repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Motorcycle, MotorcyclePatch, NewMotorcycle};
use crate::domain::repositories::MotorcycleRepository;
use crate::error::AppError;

const MOTORCYCLE_COLUMNS: &str = "id, user_id, model, year, license_plate, chassis, \
     purchase_date, current_mileage, last_update, created_at, updated_at";

/// PostgreSQL repository for the tracked motorcycle.
pub struct PgMotorcycleRepository {
    pool: Arc<PgPool>,
}

impl PgMotorcycleRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MotorcycleRepository for PgMotorcycleRepository {
    async fn create(&self, new_motorcycle: NewMotorcycle) -> Result<Motorcycle, AppError> {
        let motorcycle = sqlx::query_as::<_, Motorcycle>(&format!(
            r#"
            INSERT INTO motorcycles (
                user_id, model, year, license_plate, chassis,
                purchase_date, current_mileage
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {MOTORCYCLE_COLUMNS}
            "#
        ))
        .bind(new_motorcycle.user_id)
        .bind(&new_motorcycle.model)
        .bind(new_motorcycle.year)
        .bind(&new_motorcycle.license_plate)
        .bind(&new_motorcycle.chassis)
        .bind(new_motorcycle.purchase_date)
        .bind(new_motorcycle.current_mileage)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(motorcycle)
    }

    async fn find_by_user(&self, user_id: i64) -> Result<Option<Motorcycle>, AppError> {
        let motorcycle = sqlx::query_as::<_, Motorcycle>(&format!(
            r#"
            SELECT {MOTORCYCLE_COLUMNS}
            FROM motorcycles
            WHERE user_id = $1
            ORDER BY id DESC
            LIMIT 1
            "#
        ))
        .bind(user_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(motorcycle)
    }

    async fn update(&self, id: i64, patch: MotorcyclePatch) -> Result<Motorcycle, AppError> {
        // Explicit per-field application instead of a dynamically built
        // field list: absent fields keep the stored value, the nullable
        // columns carry a set/clear flag.
        let motorcycle = sqlx::query_as::<_, Motorcycle>(&format!(
            r#"
            UPDATE motorcycles SET
                model           = COALESCE($2, model),
                year            = COALESCE($3, year),
                license_plate   = CASE WHEN $4 THEN $5 ELSE license_plate END,
                chassis         = CASE WHEN $6 THEN $7 ELSE chassis END,
                purchase_date   = CASE WHEN $8 THEN $9 ELSE purchase_date END,
                current_mileage = COALESCE($10, current_mileage),
                last_update     = CASE WHEN $10 IS NULL THEN last_update ELSE now() END,
                updated_at      = now()
            WHERE id = $1
            RETURNING {MOTORCYCLE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&patch.model)
        .bind(patch.year)
        .bind(patch.license_plate.is_some())
        .bind(patch.license_plate.clone().flatten())
        .bind(patch.chassis.is_some())
        .bind(patch.chassis.clone().flatten())
        .bind(patch.purchase_date.is_some())
        .bind(patch.purchase_date.flatten())
        .bind(patch.current_mileage)
        .fetch_optional(self.pool.as_ref())
        .await?;

        motorcycle.ok_or_else(|| AppError::not_found("motorcycle not found"))
    }

    async fn set_mileage(&self, id: i64, mileage: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE motorcycles
            SET current_mileage = $2, last_update = now(), updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(mileage)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
