//! Offline training pipeline
//!
//! Encodes a labeled dataset with the canonical vocabulary, fits the random
//! forest, and evaluates it on a held-out split. The resulting [`FareModel`]
//! carries the schema and metrics in its metadata, ready to persist.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use smartcore::ensemble::random_forest_regressor::RandomForestRegressorParameters;
use smartcore::linalg::basic::matrix::DenseMatrix;
use tracing::info;

use super::dataset::FareRecord;
use crate::domain::{
    DomainError, EvaluationMetrics, EvaluationReport, FareModel, FeatureSchema, ForestRegressor,
    ModelMetadata, SampleCounts, TrainingParams, DISTANCE_COLUMN,
};

/// Minimum records needed for a meaningful train/test split
const MIN_RECORDS: usize = 10;

/// Fit a fare model on labeled records
pub fn train(records: &[FareRecord], params: TrainingParams) -> Result<FareModel, DomainError> {
    if records.len() < MIN_RECORDS {
        return Err(DomainError::dataset(format!(
            "need at least {MIN_RECORDS} records, got {}",
            records.len()
        )));
    }

    let schema = FeatureSchema::from_vocabulary();

    let mut rows = Vec::with_capacity(records.len());
    let mut targets = Vec::with_capacity(records.len());
    for record in records {
        rows.push(encode_record(&schema, record)?);
        targets.push(record.actual_fare_php);
    }

    let (train_idx, test_idx) = split_indices(records.len(), params.test_split, params.seed);
    info!(
        train = train_idx.len(),
        test = test_idx.len(),
        "Split dataset"
    );

    let train_rows: Vec<Vec<f64>> = train_idx.iter().map(|&i| rows[i].clone()).collect();
    let train_y: Vec<f64> = train_idx.iter().map(|&i| targets[i]).collect();
    let test_rows: Vec<Vec<f64>> = test_idx.iter().map(|&i| rows[i].clone()).collect();
    let test_y: Vec<f64> = test_idx.iter().map(|&i| targets[i]).collect();

    let x_train = matrix(&train_rows)?;
    let forest_params = RandomForestRegressorParameters::default()
        .with_n_trees(params.n_trees.into())
        .with_max_depth(params.max_depth)
        .with_min_samples_split(params.min_samples_split)
        .with_min_samples_leaf(params.min_samples_leaf)
        .with_m(params.features_per_split)
        .with_seed(params.seed);

    info!(n_trees = params.n_trees, "Fitting random forest");
    let forest = ForestRegressor::fit(&x_train, &train_y, forest_params)
        .map_err(|e| DomainError::internal(format!("fit failed: {e}")))?;

    let train_metrics = evaluate(&forest, &x_train, &train_y)?;
    let test_metrics = evaluate(&forest, &matrix(&test_rows)?, &test_y)?;
    info!(
        train_r2 = train_metrics.r2,
        test_r2 = test_metrics.r2,
        test_mae = test_metrics.mae,
        "Evaluation complete"
    );

    let metadata = ModelMetadata::new(
        schema,
        params,
        SampleCounts {
            train: train_idx.len(),
            test: test_idx.len(),
        },
        EvaluationReport {
            train: train_metrics,
            test: test_metrics,
        },
    );

    Ok(FareModel::new(forest, metadata))
}

/// Encode one labeled record into the schema's column order
fn encode_record(schema: &FeatureSchema, record: &FareRecord) -> Result<Vec<f64>, DomainError> {
    if !record.distance_km.is_finite() || record.distance_km <= 0.0 {
        return Err(DomainError::dataset(format!(
            "record has invalid distance {}",
            record.distance_km
        )));
    }

    let mut row = Vec::with_capacity(schema.n_features());
    for column in &schema.column_order {
        if column == DISTANCE_COLUMN {
            row.push(record.distance_km);
            continue;
        }

        let categorical = schema
            .categorical_by_column(column)
            .ok_or_else(|| DomainError::internal(format!("unknown column '{column}'")))?;

        let label = match categorical.field.as_str() {
            "Fuel_Price" => &record.fuel_price,
            "Time_of_Day" => &record.time_of_day,
            "Weather" => &record.weather,
            "Vehicle_Type" => &record.vehicle_type,
            other => {
                return Err(DomainError::internal(format!("unknown field '{other}'")));
            }
        };

        let code = categorical.code(label).ok_or_else(|| {
            DomainError::dataset(format!(
                "unknown {} label '{label}' in dataset",
                categorical.field
            ))
        })?;
        row.push(code);
    }

    Ok(row)
}

/// Seeded shuffle and split of record indices
fn split_indices(n: usize, test_split: f64, seed: u64) -> (Vec<usize>, Vec<usize>) {
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let n_test = ((n as f64 * test_split).round() as usize).clamp(1, n - 1);
    let test = indices[..n_test].to_vec();
    let train = indices[n_test..].to_vec();
    (train, test)
}

fn matrix(rows: &[Vec<f64>]) -> Result<DenseMatrix<f64>, DomainError> {
    Ok(DenseMatrix::from_2d_vec(&rows.to_vec()))
}

fn evaluate(
    forest: &ForestRegressor,
    x: &DenseMatrix<f64>,
    y: &[f64],
) -> Result<EvaluationMetrics, DomainError> {
    let predicted = forest
        .predict(x)
        .map_err(|e| DomainError::prediction(e.to_string()))?;

    Ok(EvaluationMetrics {
        mae: mean_absolute_error(y, &predicted),
        rmse: root_mean_squared_error(y, &predicted),
        r2: r_squared(y, &predicted),
    })
}

/// Mean absolute error
pub fn mean_absolute_error(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.is_empty() {
        return 0.0;
    }
    actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).abs())
        .sum::<f64>()
        / actual.len() as f64
}

/// Root mean squared error
pub fn root_mean_squared_error(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.is_empty() {
        return 0.0;
    }
    let mse = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).powi(2))
        .sum::<f64>()
        / actual.len() as f64;
    mse.sqrt()
}

/// Coefficient of determination
pub fn r_squared(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.is_empty() {
        return 0.0;
    }
    let mean = actual.iter().sum::<f64>() / actual.len() as f64;
    let ss_tot: f64 = actual.iter().map(|a| (a - mean).powi(2)).sum();
    let ss_res: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(a, p)| (a - p).powi(2))
        .sum();

    if ss_tot == 0.0 {
        return if ss_res == 0.0 { 1.0 } else { 0.0 };
    }
    1.0 - ss_res / ss_tot
}
