use geo::{Coord, Intersects, LineString, MultiPolygon, Polygon};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A WGS84 position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeoPoint {
    pub lng: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    fn as_coord(&self) -> Coord<f64> {
        Coord {
            x: self.lng,
            y: self.lat,
        }
    }
}

/// A `[lng, lat]` position as it appears in GeoJSON
pub type Position = [f64; 2];

/// GeoJSON polygon geometry of a district boundary.
///
/// The first ring of every polygon is its exterior; further rings are holes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum BoundaryGeometry {
    Polygon(Vec<Vec<Position>>),
    MultiPolygon(Vec<Vec<Vec<Position>>>),
}

impl BoundaryGeometry {
    /// Check ring structure: every polygon has an exterior ring and every ring
    /// is closed with at least four finite positions
    pub fn validate(&self) -> Result<(), String> {
        let polygons: Vec<&Vec<Vec<Position>>> = match self {
            BoundaryGeometry::Polygon(rings) => vec![rings],
            BoundaryGeometry::MultiPolygon(polygons) => polygons.iter().collect(),
        };

        if polygons.is_empty() {
            return Err("MultiPolygon must contain at least one polygon".to_string());
        }

        for (p, rings) in polygons.iter().enumerate() {
            if rings.is_empty() {
                return Err(format!("Polygon {} has no exterior ring", p));
            }
            for (r, ring) in rings.iter().enumerate() {
                if ring.len() < 4 {
                    return Err(format!(
                        "Ring {} of polygon {} needs at least 4 positions, got {}",
                        r,
                        p,
                        ring.len()
                    ));
                }
                if ring.iter().flatten().any(|v| !v.is_finite()) {
                    return Err(format!("Ring {} of polygon {} has a non-finite position", r, p));
                }
                if ring.first() != ring.last() {
                    return Err(format!("Ring {} of polygon {} is not closed", r, p));
                }
            }
        }

        Ok(())
    }

    pub fn to_multi_polygon(&self) -> MultiPolygon<f64> {
        match self {
            BoundaryGeometry::Polygon(rings) => MultiPolygon::new(vec![rings_to_polygon(rings)]),
            BoundaryGeometry::MultiPolygon(polygons) => {
                MultiPolygon::new(polygons.iter().map(|r| rings_to_polygon(r)).collect())
            }
        }
    }
}

fn rings_to_polygon(rings: &[Vec<Position>]) -> Polygon<f64> {
    let mut line_strings = rings.iter().map(|ring| {
        LineString::from(ring.iter().map(|[x, y]| (*x, *y)).collect::<Vec<_>>())
    });
    let exterior = line_strings
        .next()
        .unwrap_or_else(|| LineString::new(Vec::new()));
    Polygon::new(exterior, line_strings.collect())
}

/// Point-in-area test over every polygon of the area.
///
/// Points inside a hole are outside; points lying on a ring count as inside.
pub fn area_contains(area: &MultiPolygon<f64>, point: GeoPoint) -> bool {
    let coord = point.as_coord();
    area.0.iter().any(|polygon| polygon.intersects(&coord))
}
