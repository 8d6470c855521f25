use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::districts::dtos::{CreateDistrictDto, DistrictResponseDto};
use crate::features::districts::models::CreateDistrictBoundary;
use crate::features::districts::stores::BoundaryStore;

/// Service for managing district boundary reference data
pub struct DistrictService {
    store: Arc<dyn BoundaryStore>,
}

impl DistrictService {
    pub fn new(store: Arc<dyn BoundaryStore>) -> Self {
        Self { store }
    }

    /// List boundaries in match precedence order
    pub async fn list(&self) -> Result<Vec<DistrictResponseDto>> {
        let boundaries = self.store.list_ordered().await?;
        Ok(boundaries.into_iter().map(DistrictResponseDto::from).collect())
    }

    /// Register a new boundary. Existing cases keep the district they were tagged with.
    pub async fn create(&self, dto: CreateDistrictDto) -> Result<DistrictResponseDto> {
        dto.geometry.validate().map_err(AppError::Validation)?;

        let data = CreateDistrictBoundary {
            name: dto.name.trim().to_string(),
            province: dto.province.trim().to_string(),
            priority: dto.priority.unwrap_or_default(),
            geometry: dto.geometry,
        };

        let boundary = self.store.create(&data).await?;
        Ok(boundary.into())
    }
}
