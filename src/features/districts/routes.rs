use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::districts::handlers::{self, DistrictState};
use crate::features::districts::services::{DistrictResolver, DistrictService};

/// Create routes for the districts feature
pub fn routes(
    district_service: Arc<DistrictService>,
    district_resolver: Arc<DistrictResolver>,
) -> Router {
    let state = DistrictState {
        district_service,
        district_resolver,
    };

    Router::new()
        .route(
            "/api/districts",
            get(handlers::list_districts).post(handlers::create_district),
        )
        .route("/api/districts/resolve", post(handlers::resolve_point))
        .with_state(state)
}
