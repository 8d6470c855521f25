use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Half-open time range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DetectionWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DetectionWindow {
    /// The current and previous comparison windows ending at `as_of`.
    ///
    /// `None` when either window start falls outside the representable range.
    pub fn pair(as_of: DateTime<Utc>, window_days: i64) -> Option<(Self, Self)> {
        let span = Duration::try_days(window_days)?;
        let current = Self {
            start: as_of.checked_sub_signed(span)?,
            end: as_of,
        };
        let previous = Self {
            start: current.start.checked_sub_signed(span)?,
            end: current.start,
        };
        Some((current, previous))
    }
}

/// A district whose case count rose sharply against the prior window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OutbreakSignal {
    pub district: String,
    pub current_count: i64,
    pub previous_count: i64,
    /// `(current - previous) / previous * 100`; `null` when the previous
    /// window had no cases (see `new_outbreak`)
    pub increase: Option<f64>,
    /// True when the district had zero cases in the previous window
    pub new_outbreak: bool,
}
