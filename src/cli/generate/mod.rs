//! Generate command - synthetic sample dataset

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::dataset::{self, GeneratorConfig};
use crate::infrastructure::logging;

/// Arguments for the generate command
#[derive(Args, Clone)]
pub struct GenerateArgs {
    /// Output CSV path
    #[arg(long, default_value = "tricycle_fare_data.csv")]
    pub output: PathBuf,

    /// Number of records to generate
    #[arg(long, default_value_t = 500)]
    pub samples: usize,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Generate a synthetic dataset and write it as CSV
pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let records = dataset::generate(&GeneratorConfig {
        samples: args.samples,
        seed: args.seed,
    })?;
    dataset::write_csv(&args.output, &records)?;

    info!(
        records = records.len(),
        output = %args.output.display(),
        "Sample dataset generated"
    );

    Ok(())
}
