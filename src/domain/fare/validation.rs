//! Request validation
//!
//! Pure functions from a raw JSON body to a [`FareRequest`]. All failures are
//! explicit [`DomainError`] values; nothing here touches process state.

use serde_json::Value;

use super::entity::{FareRequest, REQUIRED_FIELDS};
use crate::domain::error::DomainError;
use crate::domain::features::FeatureSchema;

/// Deployment-level input bounds
///
/// The distance ceiling is a sanity policy of the deployment, not a property
/// of the trained model, so it lives in configuration rather than in the
/// artifact metadata.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationLimits {
    pub max_distance_km: f64,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_distance_km: 1000.0,
        }
    }
}

/// Validate a raw JSON body against the loaded feature schema
///
/// Checks run in a fixed order: field presence first, then the distance, then
/// each categorical field. The accepted sets come from the schema persisted
/// with the model artifact, so validation can never drift from what the
/// regressor was fit on.
pub fn validate_request(
    body: &Value,
    schema: &FeatureSchema,
    limits: &ValidationLimits,
) -> Result<FareRequest, DomainError> {
    let object = body
        .as_object()
        .ok_or_else(|| DomainError::missing_field(REQUIRED_FIELDS[0]))?;

    for field in REQUIRED_FIELDS {
        if !object.contains_key(field) {
            return Err(DomainError::missing_field(field));
        }
    }

    let distance_value = object
        .get("Distance_km")
        .ok_or_else(|| DomainError::missing_field("Distance_km"))?;
    let distance_km = parse_distance(distance_value, limits)?;

    let mut request = FareRequest {
        distance_km,
        fuel_price: String::new(),
        time_of_day: String::new(),
        weather: String::new(),
        vehicle_type: String::new(),
    };

    for categorical in &schema.categoricals {
        let raw = object
            .get(categorical.field.as_str())
            .ok_or_else(|| DomainError::missing_field(categorical.field.as_str()))?;
        let label = raw.as_str();

        let accepted = label.is_some_and(|l| categorical.accepted.iter().any(|a| a == l));
        if !accepted {
            let shown = match label {
                Some(l) => l.to_string(),
                None => raw.to_string(),
            };
            return Err(DomainError::invalid_category(
                categorical.field.as_str(),
                shown,
                &categorical.accepted,
            ));
        }

        let label = label.unwrap_or_default().to_string();
        match categorical.field.as_str() {
            "Fuel_Price" => request.fuel_price = label,
            "Time_of_Day" => request.time_of_day = label,
            "Weather" => request.weather = label,
            "Vehicle_Type" => request.vehicle_type = label,
            other => {
                return Err(DomainError::encoding_mismatch(format!(
                    "schema field '{other}' has no request counterpart"
                )));
            }
        }
    }

    Ok(request)
}

/// Parse and bound-check the distance field
///
/// Accepts a JSON number or a numeric string, mirroring the tolerant float
/// coercion of the original clients.
pub fn parse_distance(value: &Value, limits: &ValidationLimits) -> Result<f64, DomainError> {
    let distance = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|d| d.is_finite())
    .ok_or_else(|| DomainError::invalid_type("Distance_km"))?;

    if distance <= 0.0 {
        return Err(DomainError::out_of_range(
            "Distance_km",
            "Distance must be greater than 0",
        ));
    }

    if distance > limits.max_distance_km {
        return Err(DomainError::out_of_range(
            "Distance_km",
            format!(
                "Distance seems unrealistic (> {} km)",
                limits.max_distance_km
            ),
        ));
    }

    Ok(distance)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::features::FeatureSchema;

    fn schema() -> FeatureSchema {
        FeatureSchema::from_vocabulary()
    }

    fn limits() -> ValidationLimits {
        ValidationLimits::default()
    }

    fn valid_body() -> Value {
        json!({
            "Distance_km": 5.5,
            "Fuel_Price": "60-69",
            "Time_of_Day": "Rush Hour Morning",
            "Weather": "Sunny",
            "Vehicle_Type": "Tricycle"
        })
    }

    #[test]
    fn test_valid_request() {
        let request = validate_request(&valid_body(), &schema(), &limits()).unwrap();
        assert_eq!(request.distance_km, 5.5);
        assert_eq!(request.fuel_price, "60-69");
        assert_eq!(request.time_of_day, "Rush Hour Morning");
        assert_eq!(request.weather, "Sunny");
        assert_eq!(request.vehicle_type, "Tricycle");
    }

    #[test]
    fn test_distance_as_numeric_string() {
        let mut body = valid_body();
        body["Distance_km"] = json!("5.5");
        let request = validate_request(&body, &schema(), &limits()).unwrap();
        assert_eq!(request.distance_km, 5.5);
    }

    #[test]
    fn test_each_missing_field_is_named() {
        for field in REQUIRED_FIELDS {
            let mut body = valid_body();
            body.as_object_mut().unwrap().remove(field);

            let error = validate_request(&body, &schema(), &limits()).unwrap_err();
            assert_eq!(error.to_string(), format!("Missing required field: {field}"));
        }
    }

    #[test]
    fn test_non_numeric_distance() {
        let mut body = valid_body();
        body["Distance_km"] = json!("not-a-number");

        let error = validate_request(&body, &schema(), &limits()).unwrap_err();
        assert_eq!(error.to_string(), "Distance_km must be a valid number");
    }

    #[test]
    fn test_null_distance() {
        let mut body = valid_body();
        body["Distance_km"] = Value::Null;

        let error = validate_request(&body, &schema(), &limits()).unwrap_err();
        assert!(matches!(error, DomainError::InvalidType { .. }));
    }

    #[test]
    fn test_zero_and_negative_distance() {
        for distance in [0.0, -3.2] {
            let mut body = valid_body();
            body["Distance_km"] = json!(distance);

            let error = validate_request(&body, &schema(), &limits()).unwrap_err();
            assert_eq!(error.to_string(), "Distance must be greater than 0");
        }
    }

    #[test]
    fn test_distance_above_ceiling() {
        let mut body = valid_body();
        body["Distance_km"] = json!(1500);

        let error = validate_request(&body, &schema(), &limits()).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Distance seems unrealistic (> 1000 km)"
        );
    }

    #[test]
    fn test_configured_ceiling_applies() {
        let limits = ValidationLimits {
            max_distance_km: 100.0,
        };
        let mut body = valid_body();
        body["Distance_km"] = json!(150);

        let error = validate_request(&body, &schema(), &limits).unwrap_err();
        assert_eq!(error.to_string(), "Distance seems unrealistic (> 100 km)");
    }

    #[test]
    fn test_invalid_fuel_price_lists_brackets() {
        let mut body = valid_body();
        body["Fuel_Price"] = json!("invalid-price");

        let error = validate_request(&body, &schema(), &limits()).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid Fuel_Price: 'invalid-price'. Must be one of: \
             20-29, 30-39, 40-49, 50-59, 60-69, 70-79, 80-89, 90-99, 100&up"
        );
    }

    #[test]
    fn test_invalid_category_for_each_field() {
        for field in ["Fuel_Price", "Time_of_Day", "Weather", "Vehicle_Type"] {
            let mut body = valid_body();
            body[field] = json!("bogus");

            let error = validate_request(&body, &schema(), &limits()).unwrap_err();
            match error {
                DomainError::InvalidCategory {
                    field: named,
                    accepted,
                    ..
                } => {
                    assert_eq!(named, field);
                    assert!(!accepted.is_empty());
                }
                other => panic!("expected InvalidCategory, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_non_string_category_is_invalid() {
        let mut body = valid_body();
        body["Weather"] = json!(42);

        let error = validate_request(&body, &schema(), &limits()).unwrap_err();
        assert!(matches!(error, DomainError::InvalidCategory { .. }));
        assert!(error.to_string().contains("'42'"));
    }

    #[test]
    fn test_non_object_body() {
        let error = validate_request(&json!([1, 2, 3]), &schema(), &limits()).unwrap_err();
        assert!(matches!(error, DomainError::MissingField { .. }));
    }
}
