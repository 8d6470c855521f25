use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::alerts::models::Language;

/// Transport result for one recipient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum DeliveryStatus {
    /// Gateway accepted the request; `response` is its raw reply
    Sent {
        #[schema(value_type = Object)]
        response: serde_json::Value,
    },
    Failed {
        error: String,
    },
}

impl DeliveryStatus {
    pub fn is_sent(&self) -> bool {
        matches!(self, DeliveryStatus::Sent { .. })
    }
}

/// What was sent to one recipient and how the transport answered
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchOutcome {
    pub phone_number: String,
    /// Language resolved for the recipient
    pub language: Language,
    pub message: String,
    pub status: DeliveryStatus,
}
