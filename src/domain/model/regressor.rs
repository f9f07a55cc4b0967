//! Trained fare regressor
//!
//! Wraps the fitted random forest together with the metadata it was persisted
//! with. Instances are immutable after load and shared read-only across
//! requests behind an `Arc`.

use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;

use super::entity::ModelMetadata;
use crate::domain::error::DomainError;
use crate::domain::features::FeatureSchema;

/// Concrete regressor type fit and served by this crate
pub type ForestRegressor = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// A loaded, ready-to-serve fare model
#[derive(Debug)]
pub struct FareModel {
    forest: ForestRegressor,
    metadata: ModelMetadata,
}

impl FareModel {
    pub fn new(forest: ForestRegressor, metadata: ModelMetadata) -> Self {
        Self { forest, metadata }
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.metadata.schema
    }

    pub fn forest(&self) -> &ForestRegressor {
        &self.forest
    }

    /// Predict the fare for one encoded feature vector
    ///
    /// Single synchronous call into the forest; inference is deterministic
    /// and side-effect free, so there is nothing to retry.
    pub fn predict_fare(&self, features: &[f64]) -> Result<f64, DomainError> {
        let expected = self.metadata.schema.n_features();
        if features.len() != expected {
            return Err(DomainError::encoding_mismatch(format!(
                "feature vector has {} columns, model expects {}",
                features.len(),
                expected
            )));
        }

        let x = DenseMatrix::from_2d_vec(&vec![features.to_vec()]);

        let predictions = self
            .forest
            .predict(&x)
            .map_err(|e| DomainError::prediction(e.to_string()))?;

        let fare = predictions
            .first()
            .copied()
            .ok_or_else(|| DomainError::prediction("regressor returned no prediction"))?;

        Ok(finalize_fare(fare))
    }
}

/// Clamp a raw regression output to the non-negative fare floor and round
/// to 2 decimal places
pub fn finalize_fare(raw: f64) -> f64 {
    (raw.max(0.0) * 100.0).round() / 100.0
}
