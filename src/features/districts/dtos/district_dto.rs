use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::districts::models::{BoundaryGeometry, DistrictBoundary};
use crate::shared::validation::validate_not_blank;

/// Request DTO for registering a district boundary
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDistrictDto {
    #[validate(
        length(min = 1, max = 255, message = "Name must be 1-255 characters"),
        custom(function = "validate_not_blank", message = "Name must not be blank")
    )]
    pub name: String,

    #[validate(
        length(min = 1, max = 255, message = "Province must be 1-255 characters"),
        custom(function = "validate_not_blank", message = "Province must not be blank")
    )]
    pub province: String,

    /// Match precedence when boundaries overlap; lower wins (default 0)
    pub priority: Option<i32>,

    /// GeoJSON `Polygon` or `MultiPolygon`, positions as `[lng, lat]`
    #[schema(value_type = Object)]
    pub geometry: BoundaryGeometry,
}

/// Response DTO for a district boundary
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DistrictResponseDto {
    pub id: Uuid,
    pub name: String,
    pub province: String,
    pub priority: i32,
    /// `Polygon` or `MultiPolygon`
    pub geometry_type: String,
    pub created_at: DateTime<Utc>,
}

impl From<DistrictBoundary> for DistrictResponseDto {
    fn from(b: DistrictBoundary) -> Self {
        let geometry_type = match b.geometry {
            BoundaryGeometry::Polygon(_) => "Polygon",
            BoundaryGeometry::MultiPolygon(_) => "MultiPolygon",
        };

        Self {
            id: b.id,
            name: b.name,
            province: b.province,
            priority: b.priority,
            geometry_type: geometry_type.to_string(),
            created_at: b.created_at,
        }
    }
}

/// Request DTO for resolving a point to its district
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ResolvePointDto {
    #[validate(range(min = -180.0, max = 180.0, message = "lng must be within [-180, 180]"))]
    pub lng: f64,

    #[validate(range(min = -90.0, max = 90.0, message = "lat must be within [-90, 90]"))]
    pub lat: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dto(name: &str, province: &str) -> CreateDistrictDto {
        serde_json::from_value(json!({
            "name": name,
            "province": province,
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[28.1, -12.7], [28.3, -12.7], [28.3, -12.9], [28.1, -12.9], [28.1, -12.7]]]
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_valid_district() {
        assert!(dto("Kitwe", "Copperbelt").validate().is_ok());
    }

    #[test]
    fn test_rejects_whitespace_only_names() {
        let errors = dto("   ", "Copperbelt").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));

        let errors = dto("Kitwe", "\t").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("province"));
    }
}
