//! Model metadata entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::features::FeatureSchema;

/// Current metadata layout version
pub const METADATA_SCHEMA_VERSION: u32 = 1;

/// Hyperparameters a forest was fit with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingParams {
    pub n_trees: u16,
    pub max_depth: u16,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
    /// Features considered per split (sqrt of the feature count)
    pub features_per_split: usize,
    pub seed: u64,
    /// Fraction of records held out for evaluation
    pub test_split: f64,
}

impl Default for TrainingParams {
    fn default() -> Self {
        Self {
            n_trees: 100,
            max_depth: 20,
            min_samples_split: 5,
            min_samples_leaf: 2,
            features_per_split: 2,
            seed: 42,
            test_split: 0.2,
        }
    }
}

/// Regression quality metrics for one split
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationMetrics {
    pub mae: f64,
    pub rmse: f64,
    pub r2: f64,
}

/// Metrics on both splits of a training run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub train: EvaluationMetrics,
    pub test: EvaluationMetrics,
}

/// Record counts per split
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleCounts {
    pub train: usize,
    pub test: usize,
}

/// Everything about a trained model except the trees themselves
///
/// Persisted next to the serialized regressor and loaded with it; the
/// embedded [`FeatureSchema`] is the single source of truth for validation
/// and encoding at serving time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub schema_version: u32,
    pub trained_at: DateTime<Utc>,
    pub params: TrainingParams,
    pub samples: SampleCounts,
    pub evaluation: EvaluationReport,
    pub schema: FeatureSchema,
}

impl ModelMetadata {
    pub fn new(
        schema: FeatureSchema,
        params: TrainingParams,
        samples: SampleCounts,
        evaluation: EvaluationReport,
    ) -> Self {
        Self {
            schema_version: METADATA_SCHEMA_VERSION,
            trained_at: Utc::now(),
            params,
            samples,
            evaluation,
            schema,
        }
    }
}
