use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::districts::dtos::{CreateDistrictDto, DistrictResponseDto, ResolvePointDto};
use crate::features::districts::models::{GeoPoint, ResolvedLocation};
use crate::features::districts::services::{DistrictResolver, DistrictService};
use crate::shared::types::{ApiResponse, Meta};

/// State for district handlers
#[derive(Clone)]
pub struct DistrictState {
    pub district_service: Arc<DistrictService>,
    pub district_resolver: Arc<DistrictResolver>,
}

/// List district boundaries in match precedence order
#[utoipa::path(
    get,
    path = "/api/districts",
    responses(
        (status = 200, description = "District boundaries", body = ApiResponse<Vec<DistrictResponseDto>>),
        (status = 500, description = "Internal server error")
    ),
    tag = "districts"
)]
pub async fn list_districts(
    State(state): State<DistrictState>,
) -> Result<Json<ApiResponse<Vec<DistrictResponseDto>>>> {
    let districts = state.district_service.list().await?;
    let meta = Meta::count(&districts);
    Ok(Json(ApiResponse::success(
        Some(districts),
        None,
        Some(meta),
    )))
}

/// Register a district boundary
#[utoipa::path(
    post,
    path = "/api/districts",
    request_body = CreateDistrictDto,
    responses(
        (status = 201, description = "District boundary registered", body = ApiResponse<DistrictResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "districts"
)]
pub async fn create_district(
    State(state): State<DistrictState>,
    AppJson(dto): AppJson<CreateDistrictDto>,
) -> Result<(StatusCode, Json<ApiResponse<DistrictResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let district = state.district_service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(district), None, None)),
    ))
}

/// Resolve a point to the district and province containing it
///
/// Points outside every boundary resolve to `Unknown`/`Unknown`.
#[utoipa::path(
    post,
    path = "/api/districts/resolve",
    request_body = ResolvePointDto,
    responses(
        (status = 200, description = "Resolved location", body = ApiResponse<ResolvedLocation>),
        (status = 400, description = "Validation error")
    ),
    tag = "districts"
)]
pub async fn resolve_point(
    State(state): State<DistrictState>,
    AppJson(dto): AppJson<ResolvePointDto>,
) -> Result<Json<ApiResponse<ResolvedLocation>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let resolved = state
        .district_resolver
        .resolve(GeoPoint::new(dto.lng, dto.lat))
        .await;
    Ok(Json(ApiResponse::success(Some(resolved), None, None)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::districts::routes;
    use crate::shared::test_helpers::{square_boundary, InMemoryBoundaryStore};
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server() -> TestServer {
        let store = Arc::new(InMemoryBoundaryStore::new(vec![square_boundary(
            "Livingstone",
            "Southern",
            0,
            (25.7, -17.9, 26.0, -17.7),
        )]));
        let router = routes::routes(
            Arc::new(DistrictService::new(store.clone())),
            Arc::new(DistrictResolver::new(store)),
        );
        TestServer::new(router).unwrap()
    }

    #[tokio::test]
    async fn test_resolve_endpoint() {
        let server = server();

        let response = server
            .post("/api/districts/resolve")
            .json(&json!({ "lng": 25.85, "lat": -17.8 }))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["district"], "Livingstone");
        assert_eq!(body["data"]["province"], "Southern");

        let response = server
            .post("/api/districts/resolve")
            .json(&json!({ "lng": 0.0, "lat": 0.0 }))
            .await;
        let body: Value = response.json();
        assert_eq!(body["data"]["district"], "Unknown");
    }

    #[tokio::test]
    async fn test_resolve_endpoint_rejects_out_of_range() {
        let response = server()
            .post("/api/districts/resolve")
            .json(&json!({ "lng": 200.0, "lat": 0.0 }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_and_list_endpoints() {
        let server = server();

        let response = server
            .post("/api/districts")
            .json(&json!({
                "name": "Kitwe",
                "province": "Copperbelt",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[28.1, -12.7], [28.3, -12.7], [28.3, -12.9], [28.1, -12.9], [28.1, -12.7]]]
                }
            }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let body: Value = server.get("/api/districts").await.json();
        assert_eq!(body["meta"]["total"], 2);
        assert_eq!(body["data"][0]["name"], "Kitwe");
        assert_eq!(body["data"][0]["geometryType"], "Polygon");
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let server = server();

        let response = server
            .post("/api/districts")
            .json(&json!({
                "name": "   ",
                "province": "Copperbelt",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[28.1, -12.7], [28.3, -12.7], [28.3, -12.9], [28.1, -12.9], [28.1, -12.7]]]
                }
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = server.get("/api/districts").await.json();
        assert_eq!(body["meta"]["total"], 1);
    }
}
