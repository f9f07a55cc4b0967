//! Tricycle Fare API
//!
//! A fare-prediction service with two halves:
//! - an offline training pipeline that fits a random forest on labeled trip
//!   records and persists the model with its feature schema
//! - a stateless HTTP server that validates, encodes, and prices requests
//!   against the loaded artifacts

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::{info, warn};

use api::state::AppState;
use domain::ValidationLimits;
use infrastructure::artifact::ArtifactStore;

/// Create the application state, loading model artifacts from disk
///
/// A missing or unreadable artifact does not abort startup: the server comes
/// up degraded, reports `not loaded` on the health endpoints, and fails each
/// prediction with `ModelUnavailable` until restarted with valid artifacts.
pub fn create_app_state(config: &AppConfig) -> AppState {
    let limits = ValidationLimits {
        max_distance_km: config.model.max_distance_km,
    };

    let store = ArtifactStore::new(&config.model.artifact_dir);
    let model = match store.load() {
        Ok(model) => {
            let evaluation = model.metadata().evaluation;
            info!(test_r2 = evaluation.test.r2, "Model loaded successfully");
            Some(Arc::new(model))
        }
        Err(e) => {
            warn!("Starting without a model: {e}");
            warn!("Prediction requests will fail until valid artifacts are provided");
            None
        }
    };

    AppState::new(model, limits)
}
