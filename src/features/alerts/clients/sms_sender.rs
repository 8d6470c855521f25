use async_trait::async_trait;
use serde_json::Value;

use crate::core::error::Result;

/// Outbound SMS transport
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Send `message` to `recipients`, returning the gateway's raw reply.
    /// Transport and gateway failures come back as `AppError::ExternalServiceError`.
    async fn send(&self, recipients: &[String], message: &str) -> Result<Value>;
}
