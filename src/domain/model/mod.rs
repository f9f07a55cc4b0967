//! Model domain - trained regressor and its persisted metadata

mod entity;
mod regressor;

pub use entity::{
    EvaluationMetrics, EvaluationReport, ModelMetadata, SampleCounts, TrainingParams,
    METADATA_SCHEMA_VERSION,
};
pub use regressor::{finalize_fare, FareModel, ForestRegressor};
