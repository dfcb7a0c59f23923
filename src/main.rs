//! Pixabay image search - Entry Point

use clap::Parser;
use pixsearch::model::{AppError, PageSize};
use pixsearch::source::{FetchWorker, PixabayClient, PixabayConfig};
use pixsearch::view::{CliArgs, ColorConfig};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Pixabay image search - browse Pixabay results in the terminal
#[derive(Parser, Debug)]
#[command(name = "pixsearch")]
#[command(version)]
#[command(about = "TUI application for searching and browsing Pixabay images")]
pub struct Args {
    /// Search to run on startup
    #[arg(short, long)]
    pub query: Option<String>,

    /// Results per page (3-200)
    #[arg(long, value_parser = clap::value_parser!(u32).range(PageSize::MIN as i64..=PageSize::MAX as i64))]
    pub page_size: Option<u32>,

    /// Pixabay API key (overrides config file and PIXSEARCH_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config_file = pixsearch::config::load_config_with_precedence(args.config.clone())?;
    let merged = pixsearch::config::merge_config(config_file)?;

    // The log path only comes from the file, so logging can start before
    // env overrides are checked
    pixsearch::logging::init(&merged.log_file_path)?;

    let (with_env, rejected) = pixsearch::config::apply_env_overrides(merged);
    for err in &rejected {
        warn!(error = %err, "Ignoring environment override");
    }

    // clap already enforced the range
    let page_size = args.page_size.map(PageSize::new).transpose()?;
    let config = pixsearch::config::apply_cli_overrides(with_env, args.api_key.clone(), page_size);

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let api_key = config.api_key.clone().ok_or(AppError::MissingApiKey)?;
    let client = PixabayClient::new(PixabayConfig {
        api_key,
        base_url: config.api_base_url.clone(),
        image_type: config.image_type.clone(),
        timeout: Duration::from_secs(config.request_timeout_secs),
    })
    .map_err(|e| AppError::HttpClient(e.to_string()))?;

    let worker = FetchWorker::new(Arc::new(client), config.page_size);
    let cli_args = CliArgs::new(args.query, ColorConfig::from_env_and_args(args.no_color));

    pixsearch::view::run_with_worker(worker, cli_args)?;

    Ok(())
}
