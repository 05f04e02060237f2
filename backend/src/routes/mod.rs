//! Route definitions for the Crop Stress Monitoring Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Full assessment: validation + recommendations + prediction + score
        .route("/assessments", post(handlers::create_assessment))
        // Rule-only advisory path, usable while the classifier is down
        .route("/recommendations", post(handlers::create_recommendations))
}
