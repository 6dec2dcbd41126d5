//! funcslice CLI entry point

use clap::Parser;
use funcslice::cli::{Cli, Commands};
use funcslice::core::error::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging; stdout is reserved for results
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_env("FUNCSLICE_LOG"))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Slice(args) => funcslice::cli::slice::run(args).await,
        Commands::Extract(args) => funcslice::cli::extract::run(args).await,
        Commands::Serve(args) => funcslice::cli::serve::run(args).await,
        Commands::Languages(args) => funcslice::cli::languages::run(args),
    }
}
