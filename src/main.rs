//! sample-project CLI
//!
//! Prints a person, a sum, and the doubled results of a number sequence.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use sample_project::{app, RecordFormat, RunConfig};

#[derive(Parser)]
#[command(name = "sample-project", version)]
#[command(about = "Print a person, a sum, and doubled results")]
struct Cli {
    /// Path to a TOML run configuration (built-in values when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the person as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only program output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = RunConfig::load(cli.config.as_deref())?;
    info!(numbers = config.numbers.len(), timeout_ms = config.timeout_ms, "loaded config");

    let format = if cli.json {
        RecordFormat::Json
    } else {
        RecordFormat::Text
    };

    let mut out = io::stdout();
    app::run(&config, format, &mut out).await?;

    Ok(())
}
