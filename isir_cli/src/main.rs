use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use isir_cli::config::get_config;
use isir_cli::error::WorkflowError;
use isir_cli::orchestrators::{CommandArgs, CommandOrchestrator};
use isir_client_core::{IsirClient, TokioFileReader, WrapAuthClient};

#[derive(Parser)]
#[command(name = "isir")]
#[command(author, version, about = "ISIR gateway client - fetch and upload correction files", long_about = None)]
struct Cli {
    /// Operation to run: corrections | upload
    command: Option<String>,

    /// Start of the fetch window (YYYY-MM-DD or MM/DD/YYYY)
    #[arg(long)]
    start_date: Option<String>,

    /// End of the fetch window (YYYY-MM-DD or MM/DD/YYYY)
    #[arg(long)]
    end_date: Option<String>,

    /// Existing directory that receives fetched correction files
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Correction payload to upload
    #[arg(long)]
    file: Option<PathBuf>,

    /// Request timeout in seconds, forwarded to the record API client
    #[arg(long)]
    timeout: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on debug flag
    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default())
            .filter_level(log::LevelFilter::Debug)
            .filter_module("isir_client_core", log::LevelFilter::Debug)
            .filter_module("isir_cli", log::LevelFilter::Debug)
            .format_timestamp_millis()
            .init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let mut config = get_config().context("Failed to load configuration")?;
    config.apply_cli_overrides(cli.timeout);

    let auth = Arc::new(WrapAuthClient::new(config.oauth.url.clone()));
    let api = Arc::new(
        IsirClient::new(
            config.api.root_url.clone(),
            Some(Duration::from_secs(config.network.timeout_seconds)),
        )
        .context("Failed to create record API client")?,
    );
    let orchestrator = CommandOrchestrator::new(config, auth, api, Arc::new(TokioFileReader));

    let args = CommandArgs {
        command: cli.command,
        start_date: cli.start_date,
        end_date: cli.end_date,
        output_dir: cli.output_dir,
        file: cli.file,
    };

    match orchestrator.dispatch(&args).await {
        Ok(_) => Ok(()),
        Err(err) => report_failure(err),
    }
}

/// Single reporting point for workflow failures: one log line per failure,
/// with level and fatality taken from the documented policy
fn report_failure(err: WorkflowError) -> Result<()> {
    log::log!(err.log_level(), "{err}");

    if err.is_fatal() {
        return Err(anyhow::Error::new(err));
    }
    Ok(())
}
