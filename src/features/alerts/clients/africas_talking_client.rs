use async_trait::async_trait;
use serde_json::Value;

use crate::core::config::SmsConfig;
use crate::core::error::{AppError, Result};
use crate::features::alerts::clients::SmsSender;

const LIVE_MESSAGING_URL: &str = "https://api.africastalking.com/version1/messaging";
const SANDBOX_MESSAGING_URL: &str = "https://api.sandbox.africastalking.com/version1/messaging";

/// Client for the Africa's Talking bulk messaging API
pub struct AfricasTalkingClient {
    config: SmsConfig,
    http_client: reqwest::Client,
}

impl AfricasTalkingClient {
    pub fn new(config: SmsConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build SMS HTTP client: {}", e)))?;

        if config.is_sandbox() {
            tracing::info!("SMS client using Africa's Talking sandbox");
        }

        Ok(Self {
            config,
            http_client,
        })
    }

    fn messaging_url(&self) -> &'static str {
        if self.config.is_sandbox() {
            SANDBOX_MESSAGING_URL
        } else {
            LIVE_MESSAGING_URL
        }
    }

    fn form_fields<'a>(&'a self, to: &'a str, message: &'a str) -> Vec<(&'static str, &'a str)> {
        let mut fields = vec![
            ("username", self.config.username.as_str()),
            ("to", to),
            ("message", message),
        ];
        if let Some(sender_id) = &self.config.sender_id {
            fields.push(("from", sender_id.as_str()));
        }
        fields
    }
}

#[async_trait]
impl SmsSender for AfricasTalkingClient {
    async fn send(&self, recipients: &[String], message: &str) -> Result<Value> {
        let to = recipients.join(",");

        tracing::debug!("Sending SMS to {} recipient(s)", recipients.len());

        let response = self
            .http_client
            .post(self.messaging_url())
            .header("apiKey", &self.config.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&self.form_fields(&to, message))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach SMS gateway: {}", e);
                AppError::ExternalServiceError(format!("SMS gateway unreachable: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            tracing::error!("SMS gateway error: HTTP {} - {}", status, body);
            return Err(AppError::ExternalServiceError(format!(
                "SMS gateway error: HTTP {}",
                status
            )));
        }

        // The gateway sometimes answers with plain text; keep it rather than fail
        Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
    }
}
