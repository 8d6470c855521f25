use std::sync::Arc;

use crate::core::error::Result;
use crate::features::cases::dtos::{CaseResponseDto, SubmitCaseDto};
use crate::features::cases::models::{CreateCase, RdtResult};
use crate::features::cases::stores::CaseStore;
use crate::features::districts::DistrictResolver;
use crate::shared::constants::RECENT_CASES_LIMIT;

/// Service for case submission and listing
pub struct CaseService {
    store: Arc<dyn CaseStore>,
    resolver: Arc<DistrictResolver>,
}

impl CaseService {
    pub fn new(store: Arc<dyn CaseStore>, resolver: Arc<DistrictResolver>) -> Self {
        Self { store, resolver }
    }

    /// Tag a validated submission with its district, then persist it
    pub async fn submit(&self, dto: SubmitCaseDto) -> Result<CaseResponseDto> {
        let point = dto.location.to_geo_point();
        let location = self.resolver.resolve(point).await;
        if location.is_unknown() {
            tracing::warn!(
                "Case location ({}, {}) is outside every known district",
                point.lng,
                point.lat
            );
        }

        let data = CreateCase {
            reporter_name: dto.reporter_name.trim().to_string(),
            reporter_phone: dto.reporter_phone,
            patient_age: dto.patient_age,
            patient_gender: dto.patient_gender,
            lng: point.lng,
            lat: point.lat,
            district: location.district,
            province: location.province,
            symptoms: dto
                .symptoms
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            rdt_result: dto.rdt_result,
        };

        let case = self.store.create(&data).await?;

        tracing::info!(
            "Case submitted: id={}, district={:?}, rdt_result={}",
            case.id,
            case.district,
            case.rdt_result
        );
        if case.rdt_result == RdtResult::Positive {
            tracing::info!(
                "Positive case {} in district {:?}, eligible for professional notification",
                case.id,
                case.district
            );
        }

        Ok(case.into())
    }

    /// Most recent cases, newest first
    pub async fn list_recent(&self) -> Result<Vec<CaseResponseDto>> {
        let cases = self.store.list_recent(RECENT_CASES_LIMIT).await?;
        Ok(cases.into_iter().map(CaseResponseDto::from).collect())
    }
}
