use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::alerts::models::{DeliveryStatus, DispatchOutcome, Language};
use crate::features::alerts::services::DispatchReport;

/// Request DTO for sending an alert
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendAlertDto {
    /// Language code -> message text, e.g. `{"en": "...", "bem": "..."}`
    #[serde(default)]
    #[validate(length(min = 1, message = "messages must not be empty"))]
    pub messages: BTreeMap<String, String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "targetDistricts must not be empty"))]
    pub target_districts: Vec<String>,
}

/// Result for one recipient
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AlertResultDto {
    pub phone: String,
    pub status: DeliveryStatus,
    pub lang: Language,
}

impl From<DispatchOutcome> for AlertResultDto {
    fn from(o: DispatchOutcome) -> Self {
        Self {
            phone: o.phone_number,
            status: o.status,
            lang: o.language,
        }
    }
}

/// Response DTO for a dispatched alert
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlertDispatchResponseDto {
    pub alert_id: Uuid,
    pub dominant_language: Language,
    pub target_districts: Vec<String>,
    pub sent_at: DateTime<Utc>,
    pub results: Vec<AlertResultDto>,
}

impl From<DispatchReport> for AlertDispatchResponseDto {
    fn from(report: DispatchReport) -> Self {
        Self {
            alert_id: report.alert.id,
            dominant_language: report.alert.dominant_language,
            target_districts: report.alert.target_districts,
            sent_at: report.alert.sent_at,
            results: report
                .outcomes
                .into_iter()
                .map(AlertResultDto::from)
                .collect(),
        }
    }
}
