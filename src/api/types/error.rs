//! API error responses
//!
//! Errors cross the HTTP boundary as a flat JSON body: `{"error": "..."}`
//! for client faults, plus a `details` string on server faults so operators
//! can diagnose without leaking internals into the primary message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Wire shape of every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ApiErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiErrorBody {
                error: error.into(),
                details: None,
            },
        }
    }

    /// Attach operator-facing diagnostic detail
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.body.details = Some(details.into());
        self
    }

    /// Bad request error
    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error)
    }

    /// Internal server error
    pub fn internal(error: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        if err.is_client_error() {
            return Self::bad_request(err.to_string());
        }

        match &err {
            DomainError::ModelUnavailable => Self::internal(err.to_string()),
            _ => Self::internal("Internal server error during prediction")
                .with_details(err.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.body.error)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_shape() {
        let err = ApiError::bad_request("Missing required field: Weather");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let json = serde_json::to_string(&err.body).unwrap();
        assert_eq!(json, "{\"error\":\"Missing required field: Weather\"}");
    }

    #[test]
    fn test_details_are_serialized_when_present() {
        let err = ApiError::internal("Internal server error during prediction")
            .with_details("regressor returned no prediction");

        let json = serde_json::to_string(&err.body).unwrap();
        assert!(json.contains("\"details\":\"regressor returned no prediction\""));
    }

    #[test]
    fn test_validation_errors_map_to_400() {
        for err in [
            DomainError::missing_field("Time_of_Day"),
            DomainError::invalid_type("Distance_km"),
            DomainError::out_of_range("Distance_km", "Distance must be greater than 0"),
            DomainError::invalid_category("Weather", "Foggy", &["Sunny".to_string()]),
        ] {
            let api: ApiError = err.into();
            assert_eq!(api.status, StatusCode::BAD_REQUEST);
            assert!(api.body.details.is_none());
        }
    }

    #[test]
    fn test_model_unavailable_maps_to_plain_500() {
        let api: ApiError = DomainError::ModelUnavailable.into();
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            api.body.error,
            "Model not available. Please contact administrator."
        );
        assert!(api.body.details.is_none());
    }

    #[test]
    fn test_server_faults_map_to_opaque_500_with_details() {
        let api: ApiError = DomainError::encoding_mismatch("label 'X' has no persisted code").into();
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.body.error, "Internal server error during prediction");
        assert!(api.body.details.unwrap().contains("label 'X'"));
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::bad_request("nope").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
