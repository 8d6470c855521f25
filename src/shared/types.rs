use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope wrapping every JSON response, success or error
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
}

/// Collection metadata for list-shaped responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    /// Number of items in `data`
    pub total: i64,
}

impl Meta {
    pub fn count<T>(items: &[T]) -> Self {
        Self {
            total: items.len() as i64,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
        }
    }
}
