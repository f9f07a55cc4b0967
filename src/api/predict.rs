//! Prediction endpoint handlers
//!
//! The request pipeline is validate -> encode -> predict; every stage
//! short-circuits into a structured error response via [`ApiError`].

use std::collections::BTreeMap;

use axum::extract::State;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{validate_request, FeatureEncoder};

/// Successful prediction payload: the fare plus an echo of the input
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub predicted_fare: f64,
    pub input: Value,
}

/// Accepted values per categorical field, for client-side validation
#[derive(Debug, Serialize)]
pub struct ValidValuesResponse {
    pub valid_values: BTreeMap<String, Vec<String>>,
    pub max_distance_km: f64,
}

/// POST /predict
pub async fn predict(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let model = state.model()?;

    debug!("Received prediction request");

    let request = validate_request(&body, model.schema(), state.limits()).map_err(|e| {
        warn!("Validation failed: {e}");
        e
    })?;

    let features = FeatureEncoder::new(model.schema()).encode(&request)?;
    let predicted_fare = model.predict_fare(&features)?;

    debug!(predicted_fare, "Prediction successful");

    Ok(Json(PredictionResponse {
        predicted_fare,
        input: body,
    }))
}

/// GET /valid-values
pub async fn valid_values(
    State(state): State<AppState>,
) -> Result<Json<ValidValuesResponse>, ApiError> {
    let model = state.model()?;

    let valid_values = model
        .schema()
        .categoricals
        .iter()
        .map(|categorical| (categorical.field.clone(), categorical.accepted.clone()))
        .collect();

    Ok(Json(ValidValuesResponse {
        valid_values,
        max_distance_km: state.limits().max_distance_km,
    }))
}
