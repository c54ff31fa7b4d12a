pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Match API
        .route("/api/v1/match/score", post(handlers::handle_score))
        .route("/api/v1/match/batch", post(handlers::handle_batch_score))
        .route("/api/v1/match/weights", get(handlers::handle_get_weights))
        .with_state(state)
}
