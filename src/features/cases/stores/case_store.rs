use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::cases::models::{Case, CreateCase};
use crate::shared::constants::UNKNOWN_REGION;

/// Persistence for reported cases
#[async_trait]
pub trait CaseStore: Send + Sync {
    async fn create(&self, data: &CreateCase) -> Result<Case>;

    /// Most recent cases first
    async fn list_recent(&self, limit: i64) -> Result<Vec<Case>>;

    /// Case count per resolved district for cases created in `[from, to)`.
    /// Cases without a district are counted under `Unknown`.
    async fn count_by_district(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<HashMap<String, i64>>;
}

/// Postgres-backed case store over `cases`
pub struct PgCaseStore {
    pool: PgPool,
}

impl PgCaseStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct DistrictCount {
    district: String,
    count: i64,
}

#[async_trait]
impl CaseStore for PgCaseStore {
    async fn create(&self, data: &CreateCase) -> Result<Case> {
        let case = sqlx::query_as::<_, Case>(
            r#"
            INSERT INTO cases (
                reporter_name, reporter_phone, patient_age, patient_gender,
                lng, lat, district, province, symptoms, rdt_result
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING
                id, reporter_name, reporter_phone, patient_age, patient_gender,
                lng, lat, district, province, symptoms, rdt_result, status, created_at
            "#,
        )
        .bind(&data.reporter_name)
        .bind(&data.reporter_phone)
        .bind(data.patient_age)
        .bind(data.patient_gender)
        .bind(data.lng)
        .bind(data.lat)
        .bind(&data.district)
        .bind(&data.province)
        .bind(&data.symptoms)
        .bind(data.rdt_result)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create case: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(case)
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Case>> {
        sqlx::query_as::<_, Case>(
            r#"
            SELECT
                id, reporter_name, reporter_phone, patient_age, patient_gender,
                lng, lat, district, province, symptoms, rdt_result, status, created_at
            FROM cases
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list cases: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn count_by_district(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<HashMap<String, i64>> {
        let rows = sqlx::query_as::<_, DistrictCount>(
            r#"
            SELECT COALESCE(district, $3) AS district, COUNT(*) AS count
            FROM cases
            WHERE created_at >= $1 AND created_at < $2
            GROUP BY 1
            "#,
        )
        .bind(from)
        .bind(to)
        .bind(UNKNOWN_REGION)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count cases by district: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(|r| (r.district, r.count)).collect())
    }
}

