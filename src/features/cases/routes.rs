use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::cases::handlers;
use crate::features::cases::services::CaseService;

/// Create routes for the cases feature
pub fn routes(service: Arc<CaseService>) -> Router {
    Router::new()
        .route(
            "/api/cases",
            get(handlers::list_cases).post(handlers::submit_case),
        )
        .with_state(service)
}
