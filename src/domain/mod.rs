//! Domain layer - Core business logic and entities

pub mod error;
pub mod fare;
pub mod features;
pub mod model;

pub use error::DomainError;
pub use fare::{validate_request, FareRequest, ValidationLimits, REQUIRED_FIELDS};
pub use features::{
    CategoricalEncoding, FeatureEncoder, FeatureSchema, CANONICAL_SCHEMA, DISTANCE_COLUMN,
    VOCABULARY,
};
pub use model::{
    finalize_fare, EvaluationMetrics, EvaluationReport, FareModel, ForestRegressor, ModelMetadata,
    SampleCounts, TrainingParams,
};
