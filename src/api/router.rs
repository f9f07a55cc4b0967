use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::health;
use super::predict;
use super::state::AppState;

/// Create the service router
///
/// CORS is wide open: the public frontend is served from a different origin
/// and the API carries no credentials.
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Prediction API
        .route("/predict", post(predict::predict))
        .route("/valid-values", get(predict::valid_values))
        // Add state and middleware
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
