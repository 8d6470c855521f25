use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::cases::models::{Case, CaseStatus, PatientGender, RdtResult};
use crate::features::districts::models::GeoPoint;
use crate::shared::validation::{is_valid_lng_lat, validate_not_blank, PHONE_REGEX};

/// GeoJSON point, coordinates as `[lng, lat]`
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_point"))]
pub struct PointDto {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<f64>,
}

fn validate_point(point: &PointDto) -> Result<(), ValidationError> {
    if point.kind != "Point" {
        return Err(ValidationError::new("location_type")
            .with_message("location.type must be \"Point\"".into()));
    }
    match point.coordinates.as_slice() {
        [lng, lat] if is_valid_lng_lat(*lng, *lat) => Ok(()),
        _ => Err(ValidationError::new("location_coordinates")
            .with_message("location.coordinates must be [lng, lat] within WGS84 ranges".into())),
    }
}

impl PointDto {
    /// Only meaningful after validation
    pub fn to_geo_point(&self) -> GeoPoint {
        GeoPoint::new(
            self.coordinates.first().copied().unwrap_or(f64::NAN),
            self.coordinates.get(1).copied().unwrap_or(f64::NAN),
        )
    }
}

impl From<GeoPoint> for PointDto {
    fn from(p: GeoPoint) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: vec![p.lng, p.lat],
        }
    }
}

/// Request DTO for submitting a case report
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitCaseDto {
    #[validate(
        length(min = 1, max = 255, message = "Reporter name must be 1-255 characters"),
        custom(function = "validate_not_blank", message = "Reporter name must not be blank")
    )]
    pub reporter_name: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Reporter phone must be 7-15 digits with optional leading +"))]
    pub reporter_phone: String,

    #[validate(range(min = 0, max = 130, message = "Patient age must be between 0 and 130"))]
    pub patient_age: i32,

    pub patient_gender: PatientGender,

    #[validate(nested)]
    pub location: PointDto,

    #[serde(default)]
    pub symptoms: Vec<String>,

    pub rdt_result: RdtResult,
}

/// Response DTO for a case
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaseResponseDto {
    pub id: Uuid,
    pub reporter_name: String,
    pub reporter_phone: String,
    pub patient_age: i32,
    pub patient_gender: PatientGender,
    pub location: PointDto,
    pub district: Option<String>,
    pub province: Option<String>,
    pub symptoms: Vec<String>,
    pub rdt_result: RdtResult,
    pub status: CaseStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Case> for CaseResponseDto {
    fn from(c: Case) -> Self {
        Self {
            id: c.id,
            reporter_name: c.reporter_name,
            reporter_phone: c.reporter_phone,
            patient_age: c.patient_age,
            patient_gender: c.patient_gender,
            location: GeoPoint::new(c.lng, c.lat).into(),
            district: c.district,
            province: c.province,
            symptoms: c.symptoms,
            rdt_result: c.rdt_result,
            status: c.status,
            created_at: c.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dto(location: serde_json::Value) -> SubmitCaseDto {
        serde_json::from_value(json!({
            "reporterName": "Mwila Banda",
            "reporterPhone": "+260971234567",
            "patientAge": 7,
            "patientGender": "Female",
            "location": location,
            "symptoms": ["fever", "chills"],
            "rdtResult": "Positive"
        }))
        .unwrap()
    }

    #[test]
    fn test_valid_submission() {
        let dto = dto(json!({ "type": "Point", "coordinates": [28.3, -15.4] }));
        assert!(dto.validate().is_ok());
        assert_eq!(dto.location.to_geo_point(), GeoPoint::new(28.3, -15.4));
    }

    #[test]
    fn test_rejects_bad_location() {
        assert!(dto(json!({ "type": "Polygon", "coordinates": [28.3, -15.4] }))
            .validate()
            .is_err());
        assert!(dto(json!({ "type": "Point", "coordinates": [28.3] }))
            .validate()
            .is_err());
        assert!(dto(json!({ "type": "Point", "coordinates": [28.3, -95.0] }))
            .validate()
            .is_err());
    }

    #[test]
    fn test_rejects_whitespace_only_reporter_name() {
        let mut dto = dto(json!({ "type": "Point", "coordinates": [28.3, -15.4] }));
        dto.reporter_name = "  ".to_string();

        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("reporter_name"));
    }

    #[test]
    fn test_symptoms_default_to_empty() {
        let dto: SubmitCaseDto = serde_json::from_value(json!({
            "reporterName": "Mwila Banda",
            "reporterPhone": "+260971234567",
            "patientAge": 30,
            "patientGender": "Male",
            "location": { "type": "Point", "coordinates": [28.3, -15.4] },
            "rdtResult": "Negative"
        }))
        .unwrap();
        assert!(dto.symptoms.is_empty());
        assert_eq!(dto.rdt_result, RdtResult::Negative);
    }

    #[test]
    fn test_rejects_unknown_gender() {
        let result: Result<SubmitCaseDto, _> = serde_json::from_value(json!({
            "reporterName": "Mwila Banda",
            "reporterPhone": "+260971234567",
            "patientAge": 30,
            "patientGender": "Other",
            "location": { "type": "Point", "coordinates": [28.3, -15.4] },
            "rdtResult": "Negative"
        }));
        assert!(result.is_err());
    }
}
