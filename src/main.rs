//! STL to STEP add-on host harness.
//!
//! Plays the role of the CAD host: loads configuration, attaches a local
//! host root to the add-on, renders its menu and dispatches commands.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use addon_core::config::logging::LoggingConfig;

mod commands;
mod host;
mod output;

use commands::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = commands::load_config(cli.config.as_deref());
    let logging = loaded
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_default();
    init_logging(&logging);

    if let Err(e) = &loaded {
        tracing::warn!("Failed to load configuration: {}", e);
    }

    if let Err(e) = cli.execute(loaded).await {
        tracing::error!("Command failed: {}", e);
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
