pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Match analysis: score, skills, suggested roles, reasons
        .route("/analyze", post(handlers::handle_analyze))
        // Outreach: cold-email drafts and resume improvement suggestions
        .route("/cold-emails", post(handlers::handle_cold_emails))
        .layer(body_limit)
        .with_state(state)
}
