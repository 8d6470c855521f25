use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::alerts::dtos::{AlertDispatchResponseDto, SendAlertDto};
use crate::features::alerts::services::AlertDispatcher;
use crate::shared::constants::MSG_ALERT_COMPLETE;
use crate::shared::types::{ApiResponse, Meta};

/// Send a localized SMS alert to subscribers in the target districts
///
/// Each recipient gets the text in their preferred language, else the dominant
/// language of the first target district, else English. Recipients with no
/// usable text are skipped. Individual delivery failures are reported per
/// recipient in `results` and do not fail the request.
#[utoipa::path(
    post,
    path = "/api/sms/alert",
    request_body = SendAlertDto,
    responses(
        (status = 200, description = "Alert processed", body = ApiResponse<AlertDispatchResponseDto>),
        (status = 400, description = "Empty messages or targetDistricts"),
        (status = 500, description = "Internal server error")
    ),
    tag = "alerts"
)]
pub async fn send_alert(
    State(dispatcher): State<Arc<AlertDispatcher>>,
    AppJson(dto): AppJson<SendAlertDto>,
) -> Result<Json<ApiResponse<AlertDispatchResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let report = dispatcher
        .dispatch(dto.messages, dto.target_districts)
        .await?;
    let response = AlertDispatchResponseDto::from(report);
    let meta = Meta::count(&response.results);

    Ok(Json(ApiResponse::success(
        Some(response),
        Some(MSG_ALERT_COMPLETE.to_string()),
        Some(meta),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AlertConfig;
    use crate::features::alerts::models::Language;
    use crate::features::alerts::routes;
    use crate::features::alerts::services::LanguageMap;
    use crate::shared::test_helpers::{
        subscriber, InMemoryAlertStore, InMemorySubscriberStore, RecordingSmsSender,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server(subscribers: InMemorySubscriberStore, sender: RecordingSmsSender) -> TestServer {
        let dispatcher = Arc::new(AlertDispatcher::new(
            Arc::new(InMemoryAlertStore::default()),
            Arc::new(subscribers),
            Arc::new(sender),
            Arc::new(LanguageMap::zambia()),
            AlertConfig::default(),
        ));
        TestServer::new(routes::routes(dispatcher)).unwrap()
    }

    #[tokio::test]
    async fn test_send_alert_endpoint() {
        let server = server(
            InMemorySubscriberStore::new(vec![
                subscriber("+260971111111", Some(Language::Bem), Some("Kitwe")),
                subscriber("+260972222222", None, Some("Kitwe")),
            ]),
            RecordingSmsSender::failing_for(&["+260972222222"]),
        );

        let response = server
            .post("/api/sms/alert")
            .json(&json!({
                "messages": { "en": "Malaria cases rising", "bem": "Malaria ilefula" },
                "targetDistricts": ["Kitwe"]
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Alert processing complete");
        assert_eq!(body["data"]["dominantLanguage"], "bem");
        assert_eq!(body["meta"]["total"], 2);

        let results = body["data"]["results"].as_array().unwrap();
        assert_eq!(results[0]["phone"], "+260971111111");
        assert_eq!(results[0]["lang"], "bem");
        assert_eq!(results[0]["status"]["state"], "sent");
        assert_eq!(results[1]["lang"], "bem");
        assert_eq!(results[1]["status"]["state"], "failed");
    }

    #[tokio::test]
    async fn test_send_alert_rejects_empty_targets() {
        let response = server(InMemorySubscriberStore::default(), RecordingSmsSender::default())
            .post("/api/sms/alert")
            .json(&json!({ "messages": { "en": "Alert" }, "targetDistricts": [] }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_send_alert_rejects_missing_messages() {
        let response = server(InMemorySubscriberStore::default(), RecordingSmsSender::default())
            .post("/api/sms/alert")
            .json(&json!({ "targetDistricts": ["Lusaka"] }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
