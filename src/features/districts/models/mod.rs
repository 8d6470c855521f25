mod district_boundary;
mod geometry;

pub use district_boundary::{
    CreateDistrictBoundary, DistrictBoundary, DistrictBoundaryRow, ResolvedLocation,
};
pub use geometry::{area_contains, BoundaryGeometry, GeoPoint, Position};
