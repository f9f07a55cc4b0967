use thiserror::Error;

/// Core domain errors
///
/// The first four variants are client-caused validation failures and map to
/// HTTP 400 at the API boundary; the rest are server-side conditions and map
/// to HTTP 500.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("{field} must be a valid number")]
    InvalidType { field: String },

    #[error("{message}")]
    OutOfRange { field: String, message: String },

    #[error("Invalid {field}: '{value}'. Must be one of: {}", .accepted.join(", "))]
    InvalidCategory {
        field: String,
        value: String,
        accepted: Vec<String>,
    },

    #[error("Model not available. Please contact administrator.")]
    ModelUnavailable,

    #[error("Feature encoding mismatch: {message}")]
    EncodingMismatch { message: String },

    #[error("Prediction failed: {message}")]
    Prediction { message: String },

    #[error("Dataset error: {message}")]
    Dataset { message: String },

    #[error("Artifact error: {message}")]
    Artifact { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn invalid_type(field: impl Into<String>) -> Self {
        Self::InvalidType {
            field: field.into(),
        }
    }

    pub fn out_of_range(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::OutOfRange {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn invalid_category(
        field: impl Into<String>,
        value: impl Into<String>,
        accepted: &[String],
    ) -> Self {
        Self::InvalidCategory {
            field: field.into(),
            value: value.into(),
            accepted: accepted.to_vec(),
        }
    }

    pub fn encoding_mismatch(message: impl Into<String>) -> Self {
        Self::EncodingMismatch {
            message: message.into(),
        }
    }

    pub fn prediction(message: impl Into<String>) -> Self {
        Self::Prediction {
            message: message.into(),
        }
    }

    pub fn dataset(message: impl Into<String>) -> Self {
        Self::Dataset {
            message: message.into(),
        }
    }

    pub fn artifact(message: impl Into<String>) -> Self {
        Self::Artifact {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the error was caused by the client's request
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. }
                | Self::InvalidType { .. }
                | Self::OutOfRange { .. }
                | Self::InvalidCategory { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let error = DomainError::missing_field("Time_of_Day");
        assert_eq!(error.to_string(), "Missing required field: Time_of_Day");
    }

    #[test]
    fn test_invalid_type_message() {
        let error = DomainError::invalid_type("Distance_km");
        assert_eq!(error.to_string(), "Distance_km must be a valid number");
    }

    #[test]
    fn test_invalid_category_lists_accepted_values() {
        let accepted = vec!["Sunny".to_string(), "Rainy".to_string()];
        let error = DomainError::invalid_category("Weather", "Foggy", &accepted);
        assert_eq!(
            error.to_string(),
            "Invalid Weather: 'Foggy'. Must be one of: Sunny, Rainy"
        );
    }

    #[test]
    fn test_out_of_range_message() {
        let error = DomainError::out_of_range("Distance_km", "Distance must be greater than 0");
        assert_eq!(error.to_string(), "Distance must be greater than 0");
    }

    #[test]
    fn test_model_unavailable_message() {
        assert_eq!(
            DomainError::ModelUnavailable.to_string(),
            "Model not available. Please contact administrator."
        );
    }

    #[test]
    fn test_client_error_classification() {
        assert!(DomainError::missing_field("Weather").is_client_error());
        assert!(DomainError::invalid_type("Distance_km").is_client_error());
        assert!(!DomainError::ModelUnavailable.is_client_error());
        assert!(!DomainError::encoding_mismatch("bad schema").is_client_error());
    }
}
