use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::alerts::models::{Alert, CreateAlert};

/// Write-once record of dispatched alerts
#[async_trait]
pub trait AlertStore: Send + Sync {
    async fn create(&self, data: &CreateAlert) -> Result<Alert>;
}

/// Postgres-backed alert store over `alerts`
pub struct PgAlertStore {
    pool: PgPool,
}

impl PgAlertStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlertStore for PgAlertStore {
    async fn create(&self, data: &CreateAlert) -> Result<Alert> {
        sqlx::query_as::<_, Alert>(
            r#"
            INSERT INTO alerts (messages, target_districts, dominant_language)
            VALUES ($1, $2, $3)
            RETURNING id, messages, target_districts, dominant_language, sent_at
            "#,
        )
        .bind(Json(&data.messages))
        .bind(&data.target_districts)
        .bind(data.dominant_language)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create alert: {:?}", e);
            AppError::Database(e)
        })
    }
}
