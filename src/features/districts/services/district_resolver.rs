use std::sync::Arc;

use crate::features::districts::models::{
    area_contains, DistrictBoundary, GeoPoint, ResolvedLocation,
};
use crate::features::districts::stores::BoundaryStore;

/// Maps a reported point to the district and province containing it
pub struct DistrictResolver {
    store: Arc<dyn BoundaryStore>,
}

impl DistrictResolver {
    pub fn new(store: Arc<dyn BoundaryStore>) -> Self {
        Self { store }
    }

    /// Resolve a point against the boundaries as currently stored.
    ///
    /// Never fails: a miss or a store fault yields `Unknown`/`Unknown`, so case
    /// submission is never blocked by the geo lookup.
    pub async fn resolve(&self, point: GeoPoint) -> ResolvedLocation {
        let boundaries = match self.store.list_ordered().await {
            Ok(boundaries) => boundaries,
            Err(e) => {
                tracing::warn!(
                    "Boundary lookup failed for ({}, {}), resolving as Unknown: {}",
                    point.lng,
                    point.lat,
                    e
                );
                return ResolvedLocation::unknown();
            }
        };

        let resolved = Self::locate(&boundaries, point);

        tracing::debug!(
            "Resolved ({}, {}) -> district={}, province={}",
            point.lng,
            point.lat,
            resolved.district,
            resolved.province
        );

        resolved
    }

    /// First boundary in the given order whose area contains the point
    pub fn locate(boundaries: &[DistrictBoundary], point: GeoPoint) -> ResolvedLocation {
        boundaries
            .iter()
            .find(|b| area_contains(&b.geometry.to_multi_polygon(), point))
            .map(ResolvedLocation::from)
            .unwrap_or_else(ResolvedLocation::unknown)
    }
}
