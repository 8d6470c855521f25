use std::collections::BTreeMap;
use std::sync::Arc;

use futures::stream::{self, StreamExt};

use crate::core::config::AlertConfig;
use crate::core::error::{AppError, Result};
use crate::features::alerts::clients::SmsSender;
use crate::features::alerts::models::{
    Alert, CreateAlert, DeliveryStatus, DispatchOutcome, Language, Recipient,
};
use crate::features::alerts::services::LanguageMap;
use crate::features::alerts::stores::{AlertStore, SubscriberStore};

/// Stored alert plus one outcome per recipient that had usable text
#[derive(Debug, Clone)]
pub struct DispatchReport {
    pub alert: Alert,
    pub outcomes: Vec<DispatchOutcome>,
}

/// Composes, records and sends localized alerts to district subscribers
pub struct AlertDispatcher {
    alert_store: Arc<dyn AlertStore>,
    subscriber_store: Arc<dyn SubscriberStore>,
    sender: Arc<dyn SmsSender>,
    language_map: Arc<LanguageMap>,
    config: AlertConfig,
}

impl AlertDispatcher {
    pub fn new(
        alert_store: Arc<dyn AlertStore>,
        subscriber_store: Arc<dyn SubscriberStore>,
        sender: Arc<dyn SmsSender>,
        language_map: Arc<LanguageMap>,
        config: AlertConfig,
    ) -> Self {
        Self {
            alert_store,
            subscriber_store,
            sender,
            language_map,
            config,
        }
    }

    /// Record an alert and send it to every subscriber in `target_districts`.
    ///
    /// Empty `messages` or `target_districts` fail before anything is stored or
    /// sent. After that point per-recipient send failures are reported in the
    /// outcomes and never fail the call.
    pub async fn dispatch(
        &self,
        messages: BTreeMap<String, String>,
        target_districts: Vec<String>,
    ) -> Result<DispatchReport> {
        let messages = usable_messages(messages);
        if messages.is_empty() {
            return Err(AppError::Validation(
                "messages must contain at least one non-empty text".to_string(),
            ));
        }

        let target_districts: Vec<String> = target_districts
            .into_iter()
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .collect();
        let Some(first_district) = target_districts.first() else {
            return Err(AppError::Validation(
                "targetDistricts must not be empty".to_string(),
            ));
        };

        // One dominant language per batch, taken from the first district
        let dominant_language = self.language_map.dominant_language(first_district);

        let alert = self
            .alert_store
            .create(&CreateAlert {
                messages: messages.clone(),
                target_districts: target_districts.clone(),
                dominant_language,
            })
            .await?;

        tracing::info!(
            "Alert recorded: id={}, districts={:?}, dominant_language={}, languages={}",
            alert.id,
            alert.target_districts,
            alert.dominant_language,
            alert.messages.len()
        );

        let recipients = self.recipients(&target_districts).await?;

        let planned: Vec<(Recipient, Language, String)> = recipients
            .into_iter()
            .filter_map(|recipient| {
                let language = recipient.preferred_language.unwrap_or(dominant_language);
                match message_for(&messages, language) {
                    Some(text) => Some((recipient, language, text.to_string())),
                    None => {
                        tracing::debug!(
                            "No usable text for {} in '{}', skipping",
                            recipient.phone_number,
                            language
                        );
                        None
                    }
                }
            })
            .collect();

        let sender = &self.sender;
        let outcomes: Vec<DispatchOutcome> = stream::iter(planned)
            .map(|(recipient, language, message)| async move {
                let status = match sender
                    .send(std::slice::from_ref(&recipient.phone_number), &message)
                    .await
                {
                    Ok(response) => DeliveryStatus::Sent { response },
                    Err(e) => {
                        tracing::warn!(
                            "SMS to {} failed for alert: {}",
                            recipient.phone_number,
                            e
                        );
                        DeliveryStatus::Failed {
                            error: e.to_string(),
                        }
                    }
                };

                DispatchOutcome {
                    phone_number: recipient.phone_number,
                    language,
                    message,
                    status,
                }
            })
            .buffered(self.config.send_concurrency.max(1))
            .collect()
            .await;

        let sent = outcomes.iter().filter(|o| o.status.is_sent()).count();
        tracing::info!(
            "Alert {} dispatched: {} sent, {} failed",
            alert.id,
            sent,
            outcomes.len() - sent
        );

        Ok(DispatchReport { alert, outcomes })
    }

    /// Subscribers in the target districts, or the demo list when none match
    async fn recipients(&self, target_districts: &[String]) -> Result<Vec<Recipient>> {
        let subscribers = self
            .subscriber_store
            .find_by_districts(target_districts)
            .await?;

        if !subscribers.is_empty() {
            return Ok(subscribers.into_iter().map(Recipient::from).collect());
        }

        if !self.config.demo_fallback_enabled {
            tracing::info!("No subscribers in {:?}, nothing to send", target_districts);
            return Ok(Vec::new());
        }

        tracing::warn!(
            "No subscribers in {:?}, using {} demo fallback recipients",
            target_districts,
            self.config.demo_recipients.len()
        );
        Ok(self
            .config
            .demo_recipients
            .iter()
            .map(Recipient::from)
            .collect())
    }
}

/// Drop entries with blank text
fn usable_messages(messages: BTreeMap<String, String>) -> BTreeMap<String, String> {
    messages
        .into_iter()
        .filter(|(_, text)| !text.trim().is_empty())
        .collect()
}

/// Text in `language`, falling back to English
fn message_for(messages: &BTreeMap<String, String>, language: Language) -> Option<&str> {
    messages
        .get(language.code())
        .or_else(|| messages.get(Language::En.code()))
        .map(String::as_str)
}
