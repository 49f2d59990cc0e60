//! taxprep CLI - HTTP API for the tax-preparation product.

use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::format::FmtSpan;

use taxprep_config::TaxprepConfig;

mod commands;
mod output;

/// taxprep - License, badge and certificate API.
#[derive(Debug, Parser)]
#[command(name = "taxprep", version, about)]
struct Cli {
    /// Configuration file path.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format: plain (default) or json (for log aggregation).
    #[arg(long, global = true, default_value = "plain", value_parser = ["plain", "json"])]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the HTTP API server.
    Serve(commands::serve::ServeArgs),
    /// Print or check the effective configuration.
    Config(commands::config::ConfigArgs),
}

/// Picks the tracing filter: `-v` flags win over the configured level.
fn log_filter(verbose: u8, config: &TaxprepConfig) -> String {
    match verbose {
        0 => config.logging.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = taxprep_config::load_config(cli.config.as_deref())?;

    // Initialize tracing.
    let filter = log_filter(cli.verbose, &config);
    match cli.log_format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).init(),
    };

    tracing::debug!("taxprep starting with config file: {:?}", cli.config);

    match &cli.command {
        Commands::Serve(args) => commands::serve::execute(args, config).await,
        Commands::Config(args) => commands::config::execute(args, &config),
    }
}
