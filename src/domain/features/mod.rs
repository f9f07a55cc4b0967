//! Feature vocabulary, schema, and encoding

mod encoder;
mod schema;

pub use encoder::FeatureEncoder;
pub use schema::{
    CategoricalEncoding, FeatureSchema, FieldVocabulary, CANONICAL_SCHEMA, DISTANCE_COLUMN,
    VOCABULARY,
};
