use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::districts::models::{
    CreateDistrictBoundary, DistrictBoundary, DistrictBoundaryRow,
};

/// Read/write access to stored district boundaries
#[async_trait]
pub trait BoundaryStore: Send + Sync {
    /// All boundaries in match precedence order: `priority`, then `name`, then `id`.
    /// Rows whose geometry cannot be parsed are left out.
    async fn list_ordered(&self) -> Result<Vec<DistrictBoundary>>;

    async fn create(&self, data: &CreateDistrictBoundary) -> Result<DistrictBoundary>;
}

/// Postgres-backed boundary store over `district_boundaries`
pub struct PgBoundaryStore {
    pool: PgPool,
}

impl PgBoundaryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BoundaryStore for PgBoundaryStore {
    async fn list_ordered(&self) -> Result<Vec<DistrictBoundary>> {
        let rows = sqlx::query_as::<_, DistrictBoundaryRow>(
            r#"
            SELECT id, name, province, priority, geometry, created_at
            FROM district_boundaries
            ORDER BY priority ASC, name ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch district boundaries: {:?}", e);
            AppError::Database(e)
        })?;

        let boundaries = rows
            .into_iter()
            .filter_map(|row| match DistrictBoundary::try_from(row) {
                Ok(boundary) => Some(boundary),
                Err(e) => {
                    tracing::warn!("Skipping district boundary: {}", e);
                    None
                }
            })
            .collect();

        Ok(boundaries)
    }

    async fn create(&self, data: &CreateDistrictBoundary) -> Result<DistrictBoundary> {
        let geometry = serde_json::to_value(&data.geometry)
            .map_err(|e| AppError::Internal(format!("Failed to encode geometry: {}", e)))?;

        let row = sqlx::query_as::<_, DistrictBoundaryRow>(
            r#"
            INSERT INTO district_boundaries (name, province, priority, geometry)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, province, priority, geometry, created_at
            "#,
        )
        .bind(&data.name)
        .bind(&data.province)
        .bind(data.priority)
        .bind(Json(geometry))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create district boundary: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "District boundary created: id={}, name={}, province={}",
            row.id,
            row.name,
            row.province
        );

        DistrictBoundary::try_from(row).map_err(AppError::Internal)
    }
}
