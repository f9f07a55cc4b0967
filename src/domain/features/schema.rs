//! Feature schema: the column order and category codes a model was fit on
//!
//! The schema is persisted inside the model artifact's metadata and loaded
//! alongside the regressor. Serving code validates and encodes exclusively
//! from the loaded schema; the canonical vocabulary below is consulted only
//! when training a new model.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Wire name of the numeric distance feature
pub const DISTANCE_COLUMN: &str = "Distance_km";

/// Accepted values for one categorical field, in client-facing display order
#[derive(Debug, Clone, Copy)]
pub struct FieldVocabulary {
    pub field: &'static str,
    pub accepted: &'static [&'static str],
}

/// Canonical vocabulary for newly trained models
pub const VOCABULARY: [FieldVocabulary; 4] = [
    FieldVocabulary {
        field: "Fuel_Price",
        accepted: &[
            "20-29", "30-39", "40-49", "50-59", "60-69", "70-79", "80-89", "90-99", "100&up",
        ],
    },
    FieldVocabulary {
        field: "Time_of_Day",
        accepted: &["Rush Hour Morning", "Off-Peak", "Rush Hour Evening"],
    },
    FieldVocabulary {
        field: "Weather",
        accepted: &["Sunny", "Rainy"],
    },
    FieldVocabulary {
        field: "Vehicle_Type",
        accepted: &["Single Motor", "Tricycle"],
    },
];

/// Schema built from the canonical vocabulary, shared by training and tests
pub static CANONICAL_SCHEMA: Lazy<FeatureSchema> = Lazy::new(FeatureSchema::from_vocabulary);

/// Ordinal encoding of one categorical field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalEncoding {
    /// Wire name of the field, e.g. `Fuel_Price`
    pub field: String,

    /// Name of the encoded model column, e.g. `Fuel_Price_encoded`
    pub column: String,

    /// Accepted labels in display order, used for error messages and
    /// the valid-values endpoint
    pub accepted: Vec<String>,

    /// Label to ordinal code, frozen at training time
    pub codes: BTreeMap<String, f64>,
}

impl CategoricalEncoding {
    /// Ordinal code for a label, if it is part of the vocabulary
    pub fn code(&self, label: &str) -> Option<f64> {
        self.codes.get(label).copied()
    }
}

/// Complete feature layout the regressor was fit on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSchema {
    /// Model input columns in exact fit order
    pub column_order: Vec<String>,

    /// Categorical encodings, in input-field order
    pub categoricals: Vec<CategoricalEncoding>,
}

impl FeatureSchema {
    /// Build the schema for a new training run from the canonical vocabulary
    ///
    /// Codes are assigned by lexicographic label order, reproducing the
    /// label-encoder semantics the historical models were fit with.
    pub fn from_vocabulary() -> Self {
        let categoricals: Vec<CategoricalEncoding> = VOCABULARY
            .iter()
            .map(|vocabulary| {
                let mut sorted: Vec<&str> = vocabulary.accepted.to_vec();
                sorted.sort_unstable();

                let codes = sorted
                    .iter()
                    .enumerate()
                    .map(|(index, label)| (label.to_string(), index as f64))
                    .collect();

                CategoricalEncoding {
                    field: vocabulary.field.to_string(),
                    column: format!("{}_encoded", vocabulary.field),
                    accepted: vocabulary.accepted.iter().map(|v| v.to_string()).collect(),
                    codes,
                }
            })
            .collect();

        let mut column_order = vec![DISTANCE_COLUMN.to_string()];
        column_order.extend(categoricals.iter().map(|c| c.column.clone()));

        Self {
            column_order,
            categoricals,
        }
    }

    /// Number of model input features
    pub fn n_features(&self) -> usize {
        self.column_order.len()
    }

    /// Look up a categorical encoding by field name
    pub fn categorical(&self, field: &str) -> Option<&CategoricalEncoding> {
        self.categoricals.iter().find(|c| c.field == field)
    }

    /// Look up a categorical encoding by encoded column name
    pub fn categorical_by_column(&self, column: &str) -> Option<&CategoricalEncoding> {
        self.categoricals.iter().find(|c| c.column == column)
    }
}
