pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume Analysis API
        .route(
            "/api/v1/resume/analyze",
            post(handlers::handle_analyze_upload),
        )
        .route(
            "/api/v1/resume/analyze-text",
            post(handlers::handle_analyze_text),
        )
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
