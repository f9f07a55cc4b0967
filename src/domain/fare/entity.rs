//! Fare request entity and field names

use serde::{Deserialize, Serialize};

/// Required request fields, in validation order
pub const REQUIRED_FIELDS: [&str; 5] = [
    "Distance_km",
    "Fuel_Price",
    "Time_of_Day",
    "Weather",
    "Vehicle_Type",
];

/// A fully validated prediction request
///
/// Construction goes through [`super::validate_request`]; a value of this type
/// is guaranteed to carry a positive in-range distance and categorical labels
/// that are members of the loaded model's vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareRequest {
    #[serde(rename = "Distance_km")]
    pub distance_km: f64,

    #[serde(rename = "Fuel_Price")]
    pub fuel_price: String,

    #[serde(rename = "Time_of_Day")]
    pub time_of_day: String,

    #[serde(rename = "Weather")]
    pub weather: String,

    #[serde(rename = "Vehicle_Type")]
    pub vehicle_type: String,
}

impl FareRequest {
    /// Look up a categorical field by its wire name
    pub fn categorical(&self, field: &str) -> Option<&str> {
        match field {
            "Fuel_Price" => Some(&self.fuel_price),
            "Time_of_Day" => Some(&self.time_of_day),
            "Weather" => Some(&self.weather),
            "Vehicle_Type" => Some(&self.vehicle_type),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> FareRequest {
        FareRequest {
            distance_km: 5.5,
            fuel_price: "60-69".to_string(),
            time_of_day: "Rush Hour Morning".to_string(),
            weather: "Sunny".to_string(),
            vehicle_type: "Tricycle".to_string(),
        }
    }

    #[test]
    fn test_categorical_lookup() {
        let req = request();
        assert_eq!(req.categorical("Fuel_Price"), Some("60-69"));
        assert_eq!(req.categorical("Weather"), Some("Sunny"));
        assert_eq!(req.categorical("Distance_km"), None);
        assert_eq!(req.categorical("Unknown"), None);
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(request()).unwrap();
        for field in REQUIRED_FIELDS {
            assert!(json.get(field).is_some(), "missing wire field {field}");
        }
    }
}
