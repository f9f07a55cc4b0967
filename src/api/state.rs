//! Application state shared across requests

use std::sync::Arc;

use crate::domain::{DomainError, FareModel, ValidationLimits};

/// Shared, read-only serving state
///
/// The model handle is fixed at startup: either a loaded model or `None`
/// when the artifacts were missing or unreadable. There is no reload path;
/// replacing the model means restarting the process.
#[derive(Clone)]
pub struct AppState {
    model: Option<Arc<FareModel>>,
    limits: ValidationLimits,
}

impl AppState {
    pub fn new(model: Option<Arc<FareModel>>, limits: ValidationLimits) -> Self {
        Self { model, limits }
    }

    /// The loaded model, or `ModelUnavailable` when startup found none
    pub fn model(&self) -> Result<&FareModel, DomainError> {
        self.model
            .as_deref()
            .ok_or(DomainError::ModelUnavailable)
    }

    pub fn model_loaded(&self) -> bool {
        self.model.is_some()
    }

    pub fn limits(&self) -> &ValidationLimits {
        &self.limits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_without_model() {
        let state = AppState::new(None, ValidationLimits::default());
        assert!(!state.model_loaded());
        assert!(matches!(
            state.model().unwrap_err(),
            DomainError::ModelUnavailable
        ));
    }

    #[test]
    fn test_limits_are_exposed() {
        let limits = ValidationLimits {
            max_distance_km: 100.0,
        };
        let state = AppState::new(None, limits);
        assert_eq!(state.limits().max_distance_km, 100.0);
    }
}
