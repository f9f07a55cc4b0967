//! Train command - offline training run

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::config::AppConfig;
use crate::domain::TrainingParams;
use crate::infrastructure::artifact::ArtifactStore;
use crate::infrastructure::{dataset, logging, training};

/// Arguments for the train command
#[derive(Args, Clone)]
pub struct TrainArgs {
    /// Path to the labeled training dataset CSV
    #[arg(long, default_value = "tricycle_fare_data.csv")]
    pub data: PathBuf,

    /// Directory to write model artifacts to
    #[arg(long, default_value = "artifacts")]
    pub output: PathBuf,

    /// Number of trees in the forest
    #[arg(long, default_value_t = 100)]
    pub trees: u16,

    /// Random seed for the split and the forest
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Run a training pipeline end to end
pub fn run(args: TrainArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    info!(data = %args.data.display(), "Loading dataset");
    let records = dataset::read_csv(&args.data)?;
    info!(records = records.len(), "Dataset loaded");

    let params = TrainingParams {
        n_trees: args.trees,
        seed: args.seed,
        ..TrainingParams::default()
    };
    let model = training::train(&records, params)?;

    let evaluation = model.metadata().evaluation;
    info!(
        mae = evaluation.test.mae,
        rmse = evaluation.test.rmse,
        r2 = evaluation.test.r2,
        "Test set performance"
    );
    info!(
        mae = evaluation.train.mae,
        rmse = evaluation.train.rmse,
        r2 = evaluation.train.r2,
        "Training set performance"
    );

    let store = ArtifactStore::new(&args.output);
    store.save(&model)?;
    info!(
        model = %store.model_path().display(),
        metadata = %store.metadata_path().display(),
        "Training complete"
    );

    Ok(())
}
