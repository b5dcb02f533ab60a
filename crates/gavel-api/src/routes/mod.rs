//! Route definitions
//!
//! All API routes organized by resource and mounted under /api/v1.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{flags, health, moderation};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(flag_routes())
        .merge(moderation_routes())
}

/// Flag submission routes
fn flag_routes() -> Router<AppState> {
    Router::new().route("/flags", post(flags::create_flag))
}

/// Moderator routes
fn moderation_routes() -> Router<AppState> {
    Router::new()
        .route("/moderation/flags", get(moderation::get_pending_flags))
        .route("/moderation/resolutions", post(moderation::resolve_flag))
}
