//! SOS capabilities cache loader.
//!
//! Loads a capabilities seed and optional observation batches into the
//! cache and prints a JSON summary of the published snapshot on stdout.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use cache_loader::{load, load_observations, load_seed, summarize};

#[derive(Parser, Debug)]
#[command(name = "cache-loader")]
#[command(about = "Load an SOS capabilities seed and print a summary")]
struct Args {
    /// Capabilities seed (YAML)
    #[arg(short, long, env = "SOS_SEED_FILE")]
    seed: PathBuf,

    /// Observation batch files (YAML), applied in order
    #[arg(short, long = "observations")]
    observations: Vec<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json: bool,

    /// Pretty-print the summary
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args)?;

    info!(seed = ?args.seed, batches = args.observations.len(), "Starting cache loader");

    let document = load_seed(&args.seed)?;
    let config = document.cache_config(|key| std::env::var(key).ok())?;
    info!(
        default_epsg_code = config.default_epsg_code,
        languages = ?config.supported_languages,
        "Loaded configuration"
    );

    let batches = args
        .observations
        .iter()
        .map(load_observations)
        .collect::<Result<Vec<_>>>()?;

    let controller = load(config, document, batches).await?;
    let summary = summarize(&controller);
    info!(offerings = summary.offerings.len(), "Cache loaded");

    let output = if args.pretty {
        serde_json::to_string_pretty(&summary)
    } else {
        serde_json::to_string(&summary)
    }
    .context("Failed to serialize summary")?;
    println!("{}", output);

    Ok(())
}

fn init_tracing(args: &Args) -> Result<()> {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // stdout carries the summary
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if args.json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}
