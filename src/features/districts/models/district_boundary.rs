use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::features::districts::models::BoundaryGeometry;
use crate::shared::constants::UNKNOWN_REGION;

/// Database row for a district boundary; geometry is raw GeoJSON
#[derive(Debug, Clone, FromRow)]
pub struct DistrictBoundaryRow {
    pub id: Uuid,
    pub name: String,
    pub province: String,
    pub priority: i32,
    pub geometry: Json<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

/// District boundary with parsed geometry
#[derive(Debug, Clone)]
pub struct DistrictBoundary {
    pub id: Uuid,
    pub name: String,
    pub province: String,
    /// Lower values win when boundaries overlap
    pub priority: i32,
    pub geometry: BoundaryGeometry,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DistrictBoundaryRow> for DistrictBoundary {
    type Error = String;

    fn try_from(row: DistrictBoundaryRow) -> Result<Self, Self::Error> {
        let geometry: BoundaryGeometry = serde_json::from_value(row.geometry.0)
            .map_err(|e| format!("Invalid geometry for district '{}': {}", row.name, e))?;

        Ok(Self {
            id: row.id,
            name: row.name,
            province: row.province,
            priority: row.priority,
            geometry,
            created_at: row.created_at,
        })
    }
}

/// Data for registering a new district boundary
#[derive(Debug, Clone)]
pub struct CreateDistrictBoundary {
    pub name: String,
    pub province: String,
    pub priority: i32,
    pub geometry: BoundaryGeometry,
}

/// District and province a point resolved to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ResolvedLocation {
    pub district: String,
    pub province: String,
}

impl ResolvedLocation {
    pub fn unknown() -> Self {
        Self {
            district: UNKNOWN_REGION.to_string(),
            province: UNKNOWN_REGION.to_string(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.district == UNKNOWN_REGION
    }
}

impl From<&DistrictBoundary> for ResolvedLocation {
    fn from(b: &DistrictBoundary) -> Self {
        Self {
            district: b.name.clone(),
            province: b.province.clone(),
        }
    }
}
