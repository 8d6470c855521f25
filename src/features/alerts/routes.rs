use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::alerts::handlers;
use crate::features::alerts::services::AlertDispatcher;

/// Create routes for the alerts feature
pub fn routes(dispatcher: Arc<AlertDispatcher>) -> Router {
    Router::new()
        .route("/api/sms/alert", post(handlers::send_alert))
        .with_state(dispatcher)
}
