//! Feature encoding
//!
//! Turns a validated [`FareRequest`] into the numeric vector the regressor
//! expects. Pure and deterministic: the same request always produces the same
//! vector, in the exact column order recorded in the schema.

use super::schema::{FeatureSchema, DISTANCE_COLUMN};
use crate::domain::error::DomainError;
use crate::domain::fare::FareRequest;

/// Encoder over a loaded feature schema
#[derive(Debug, Clone, Copy)]
pub struct FeatureEncoder<'a> {
    schema: &'a FeatureSchema,
}

impl<'a> FeatureEncoder<'a> {
    pub fn new(schema: &'a FeatureSchema) -> Self {
        Self { schema }
    }

    /// Encode a validated request into the model's feature vector
    ///
    /// Validation has already established every label against this same
    /// schema, so a lookup miss here means the persisted metadata is
    /// internally inconsistent - a server-side fault, not a client error.
    pub fn encode(&self, request: &FareRequest) -> Result<Vec<f64>, DomainError> {
        let mut features = Vec::with_capacity(self.schema.n_features());

        for column in &self.schema.column_order {
            if column == DISTANCE_COLUMN {
                features.push(request.distance_km);
                continue;
            }

            let categorical = self.schema.categorical_by_column(column).ok_or_else(|| {
                DomainError::encoding_mismatch(format!("unknown model column '{column}'"))
            })?;

            let label = request.categorical(&categorical.field).ok_or_else(|| {
                DomainError::encoding_mismatch(format!(
                    "request has no field '{}'",
                    categorical.field
                ))
            })?;

            let code = categorical.code(label).ok_or_else(|| {
                DomainError::encoding_mismatch(format!(
                    "label '{}' of field '{}' has no persisted code",
                    label, categorical.field
                ))
            })?;

            features.push(code);
        }

        Ok(features)
    }
}
