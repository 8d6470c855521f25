use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::cases::dtos::{CaseResponseDto, SubmitCaseDto};
use crate::features::cases::services::CaseService;
use crate::shared::constants::MSG_CASE_SUBMITTED;
use crate::shared::types::{ApiResponse, Meta};

/// Submit a new case report
///
/// The reported location is resolved to a district and province before the case
/// is stored. Points outside every known district are stored as `Unknown`.
#[utoipa::path(
    post,
    path = "/api/cases",
    request_body = SubmitCaseDto,
    responses(
        (status = 201, description = "Case submitted", body = ApiResponse<CaseResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Internal server error")
    ),
    tag = "cases"
)]
pub async fn submit_case(
    State(service): State<Arc<CaseService>>,
    AppJson(dto): AppJson<SubmitCaseDto>,
) -> Result<(StatusCode, Json<ApiResponse<CaseResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let case = service.submit(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(case),
            Some(MSG_CASE_SUBMITTED.to_string()),
            None,
        )),
    ))
}

/// List the most recent cases (newest first, at most 100)
#[utoipa::path(
    get,
    path = "/api/cases",
    responses(
        (status = 200, description = "Recent cases", body = ApiResponse<Vec<CaseResponseDto>>),
        (status = 500, description = "Internal server error")
    ),
    tag = "cases"
)]
pub async fn list_cases(
    State(service): State<Arc<CaseService>>,
) -> Result<Json<ApiResponse<Vec<CaseResponseDto>>>> {
    let cases = service.list_recent().await?;
    let meta = Meta::count(&cases);
    Ok(Json(ApiResponse::success(
        Some(cases),
        None,
        Some(meta),
    )))
}
