use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::core::config::FallbackRecipient;
use crate::features::alerts::models::Language;

/// Database model for an SMS alert subscriber
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Subscriber {
    pub id: Uuid,
    pub phone_number: String,
    pub preferred_language: Option<Language>,
    pub district: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Someone an alert is addressed to, either a subscriber or a fallback number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub phone_number: String,
    pub preferred_language: Option<Language>,
}

impl From<Subscriber> for Recipient {
    fn from(s: Subscriber) -> Self {
        Self {
            phone_number: s.phone_number,
            preferred_language: s.preferred_language,
        }
    }
}

impl From<&FallbackRecipient> for Recipient {
    fn from(f: &FallbackRecipient) -> Self {
        Self {
            phone_number: f.phone_number.clone(),
            preferred_language: Some(f.language),
        }
    }
}
