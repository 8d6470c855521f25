use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::alerts::models::Subscriber;

/// Read access to SMS subscribers
#[async_trait]
pub trait SubscriberStore: Send + Sync {
    /// Subscribers whose district is one of `districts`, oldest registration first
    async fn find_by_districts(&self, districts: &[String]) -> Result<Vec<Subscriber>>;
}

/// Postgres-backed subscriber store over `subscribers`
pub struct PgSubscriberStore {
    pool: PgPool,
}

impl PgSubscriberStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriberStore for PgSubscriberStore {
    async fn find_by_districts(&self, districts: &[String]) -> Result<Vec<Subscriber>> {
        sqlx::query_as::<_, Subscriber>(
            r#"
            SELECT id, phone_number, preferred_language, district, created_at
            FROM subscribers
            WHERE district = ANY($1)
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(districts)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch subscribers: {:?}", e);
            AppError::Database(e)
        })
    }
}
