use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::features::alerts::models::Language;

/// Database model for a dispatched alert; immutable once stored
#[derive(Debug, Clone, FromRow)]
pub struct Alert {
    pub id: Uuid,
    /// Language code -> message text
    pub messages: Json<BTreeMap<String, String>>,
    pub target_districts: Vec<String>,
    pub dominant_language: Language,
    pub sent_at: DateTime<Utc>,
}

/// Data for recording a new alert
#[derive(Debug, Clone)]
pub struct CreateAlert {
    pub messages: BTreeMap<String, String>,
    pub target_districts: Vec<String>,
    pub dominant_language: Language,
}
