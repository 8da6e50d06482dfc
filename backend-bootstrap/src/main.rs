use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use backend_bootstrap::{Cli, Command};
use backend_infrastructure::CONFIG_PATH_ENV;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    if let Some(config) = &cli.config {
        std::env::set_var(CONFIG_PATH_ENV, config);
    }

    match cli.command() {
        Command::Serve => {
            backend_bootstrap::run_standalone().await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Copy {
            series_id,
            source_api_key,
            target_api_key,
        } => backend_bootstrap::run_copy(series_id, source_api_key, target_api_key).await,
        Command::ListSeries { source_api_key } => {
            backend_bootstrap::run_list_series(source_api_key).await
        }
    }
}
