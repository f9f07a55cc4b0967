use clap::Parser;
use tricycle_fare_api::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Train(args) => cli::train::run(args),
        Command::Generate(args) => cli::generate::run(args),
    }
}
