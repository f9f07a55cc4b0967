//! CLI module for the Tricycle Fare API
//!
//! Provides subcommands for the two halves of the system:
//! - `serve`: HTTP prediction server over previously trained artifacts
//! - `train`: offline training run producing those artifacts
//! - `generate`: synthetic sample dataset for trying the pipeline

pub mod generate;
pub mod serve;
pub mod train;

use clap::{Parser, Subcommand};

/// Tricycle Fare API - fare prediction service
#[derive(Parser)]
#[command(name = "tricycle-fare-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the prediction API server
    Serve,

    /// Train a model from a CSV dataset and persist the artifacts
    Train(train::TrainArgs),

    /// Generate a synthetic sample dataset
    Generate(generate::GenerateArgs),
}
