/// Region name recorded when a point falls outside every known boundary
pub const UNKNOWN_REGION: &str = "Unknown";

/// Maximum number of cases returned by the recent-cases listing
pub const RECENT_CASES_LIMIT: i64 = 100;

// =============================================================================
// MESSAGE CONSTANTS
// =============================================================================

pub const MSG_CASE_SUBMITTED: &str = "Case submitted successfully";

pub const MSG_ALERT_COMPLETE: &str = "Alert processing complete";
