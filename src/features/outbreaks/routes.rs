use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::outbreaks::handlers;
use crate::features::outbreaks::services::OutbreakDetector;

/// Create routes for the outbreaks feature
pub fn routes(detector: Arc<OutbreakDetector>) -> Router {
    Router::new()
        .route(
            "/api/outbreaks/generate",
            get(handlers::generate_outbreaks),
        )
        .with_state(detector)
}
