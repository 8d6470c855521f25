use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Utc;

use crate::core::error::Result;
use crate::core::extractor::AppQuery;
use crate::features::outbreaks::dtos::OutbreakQueryParams;
use crate::features::outbreaks::models::OutbreakSignal;
use crate::features::outbreaks::services::OutbreakDetector;
use crate::shared::types::{ApiResponse, Meta};

/// Detect districts with a significant rise in cases
///
/// Compares the last 14 days with the 14 days before (configurable). With default
/// thresholds a district is flagged when it has more than 5 recent cases and more
/// than 1.5x its previous count.
#[utoipa::path(
    get,
    path = "/api/outbreaks/generate",
    params(OutbreakQueryParams),
    responses(
        (status = 200, description = "Flagged districts", body = ApiResponse<Vec<OutbreakSignal>>),
        (status = 400, description = "Invalid asOf"),
        (status = 500, description = "Internal server error")
    ),
    tag = "outbreaks"
)]
pub async fn generate_outbreaks(
    State(detector): State<Arc<OutbreakDetector>>,
    AppQuery(params): AppQuery<OutbreakQueryParams>,
) -> Result<Json<ApiResponse<Vec<OutbreakSignal>>>> {
    let as_of = params.as_of.unwrap_or_else(Utc::now);
    let signals = detector.detect(as_of).await?;
    let meta = Meta::count(&signals);
    Ok(Json(ApiResponse::success(
        Some(signals),
        None,
        Some(meta),
    )))
}
