use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for an outbreak scan
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct OutbreakQueryParams {
    /// End of the current window (RFC 3339); defaults to now
    pub as_of: Option<DateTime<Utc>>,
}
