//! Health check endpoints
//!
//! `/health` always answers 200 while the process is alive and reports
//! whether a model is loaded; `/ready` gates traffic on the model so a
//! deployment can hold requests back until artifacts are in place.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use super::state::AppState;
use crate::api::types::Json;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub model_status: ModelStatus,
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
pub enum ModelStatus {
    #[serde(rename = "loaded")]
    Loaded,
    #[serde(rename = "not loaded")]
    NotLoaded,
}

impl ModelStatus {
    fn of(state: &AppState) -> Self {
        if state.model_loaded() {
            Self::Loaded
        } else {
            Self::NotLoaded
        }
    }
}

/// Simple health check - 200 as long as the process is serving
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        model_status: ModelStatus::of(&state),
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check - 503 until a model is loaded
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let loaded = state.model_loaded();
    let response = HealthResponse {
        status: if loaded {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        },
        version: env!("CARGO_PKG_VERSION").to_string(),
        model_status: ModelStatus::of(&state),
    };

    let status_code = if loaded {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}

/// Liveness check - bare 200 for crash detection
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use axum::response::IntoResponse;

    use super::*;
    use crate::domain::ValidationLimits;

    fn empty_state() -> AppState {
        AppState::new(None, ValidationLimits::default())
    }

    #[test]
    fn test_model_status_serialization() {
        assert_eq!(
            serde_json::to_string(&ModelStatus::Loaded).unwrap(),
            "\"loaded\""
        );
        assert_eq!(
            serde_json::to_string(&ModelStatus::NotLoaded).unwrap(),
            "\"not loaded\""
        );
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: HealthStatus::Healthy,
            version: "1.0.0".to_string(),
            model_status: ModelStatus::NotLoaded,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"healthy\""));
        assert!(json.contains("\"model_status\":\"not loaded\""));
    }

    #[tokio::test]
    async fn test_health_is_200_without_model() {
        let response = health_check(State(empty_state())).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_ready_is_503_without_model() {
        let response = ready_check(State(empty_state())).await.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_live_is_200() {
        let response = live_check().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
