use utoipa::{Modify, OpenApi};

use crate::features::alerts::{
    dtos as alerts_dtos, handlers as alerts_handlers, models as alerts_models,
};
use crate::features::cases::{
    dtos as cases_dtos, handlers as cases_handlers, models as cases_models,
};
use crate::features::districts::{
    dtos as districts_dtos, handlers as districts_handlers, models as districts_models,
};
use crate::features::outbreaks::{handlers as outbreaks_handlers, models as outbreaks_models};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Districts
        districts_handlers::list_districts,
        districts_handlers::create_district,
        districts_handlers::resolve_point,
        // Cases
        cases_handlers::submit_case,
        cases_handlers::list_cases,
        // Outbreaks
        outbreaks_handlers::generate_outbreaks,
        // Alerts
        alerts_handlers::send_alert,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Districts
            districts_models::GeoPoint,
            districts_models::ResolvedLocation,
            districts_dtos::CreateDistrictDto,
            districts_dtos::DistrictResponseDto,
            districts_dtos::ResolvePointDto,
            ApiResponse<Vec<districts_dtos::DistrictResponseDto>>,
            ApiResponse<districts_dtos::DistrictResponseDto>,
            ApiResponse<districts_models::ResolvedLocation>,
            // Cases
            cases_models::RdtResult,
            cases_models::PatientGender,
            cases_models::CaseStatus,
            cases_dtos::PointDto,
            cases_dtos::SubmitCaseDto,
            cases_dtos::CaseResponseDto,
            ApiResponse<cases_dtos::CaseResponseDto>,
            ApiResponse<Vec<cases_dtos::CaseResponseDto>>,
            // Outbreaks
            outbreaks_models::OutbreakSignal,
            ApiResponse<Vec<outbreaks_models::OutbreakSignal>>,
            // Alerts
            alerts_models::Language,
            alerts_models::DeliveryStatus,
            alerts_dtos::SendAlertDto,
            alerts_dtos::AlertResultDto,
            alerts_dtos::AlertDispatchResponseDto,
            ApiResponse<alerts_dtos::AlertDispatchResponseDto>,
        )
    ),
    tags(
        (name = "districts", description = "District boundaries and point resolution"),
        (name = "cases", description = "Malaria case reports"),
        (name = "outbreaks", description = "Outbreak detection over recent cases"),
        (name = "alerts", description = "Multilingual SMS alerts"),
    ),
    info(
        title = "Malaria Surveillance API",
        version = "0.1.0",
        description = "Case reporting, outbreak detection and SMS alerting for malaria surveillance",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
