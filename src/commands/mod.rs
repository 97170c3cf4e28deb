//! Harness command definitions and dispatch.

pub mod config;
pub mod convert;
pub mod dispatch;
pub mod menu;
pub mod run;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};

use addon_converter::ConverterAddOn;
use addon_core::config::AppConfig;
use addon_core::error::AppError;
use addon_core::result::AppResult;

use crate::host::{ConsoleNotifier, LocalHost, PromptPicker};
use crate::output::OutputFormat;

/// Environment variable selecting the configuration overlay.
pub const ENV_VAR: &str = "STLSTEP_ENV";

/// STL to STEP add-on host harness
#[derive(Debug, Parser)]
#[command(name = "stl-step-addon", version, about, long_about = None)]
pub struct Cli {
    /// Additional configuration file merged over config/default.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the add-on menu tree
    Menu,
    /// Invoke a menu entry by id
    Dispatch(dispatch::DispatchArgs),
    /// Convert a file directly, bypassing the menu
    Convert(convert::ConvertArgs),
    /// Interactive host loop
    Run(run::RunArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the command against the loaded configuration
    pub async fn execute(&self, loaded: AppResult<AppConfig>) -> Result<(), AppError> {
        if let Commands::Config(args) = &self.command {
            return config::execute(args, loaded, self.config.as_deref(), self.format).await;
        }

        let config = loaded?;
        match &self.command {
            Commands::Menu => menu::execute(&config, self.format).await,
            Commands::Dispatch(args) => dispatch::execute(args, &config, self.format).await,
            Commands::Convert(args) => convert::execute(args, &config, self.format).await,
            Commands::Run(args) => run::execute(args, &config, self.format).await,
            Commands::Config(_) => Ok(()),
        }
    }
}

/// Helper: load configuration for the environment named by `STLSTEP_ENV`
pub fn load_config(explicit: Option<&Path>) -> AppResult<AppConfig> {
    let env = std::env::var(ENV_VAR).unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env, explicit)
}

/// Helper: build the add-on and attach a local host root
pub async fn load_addon(
    config: &AppConfig,
    format: OutputFormat,
    preset: Option<PathBuf>,
) -> Result<(ConverterAddOn, Arc<LocalHost>), AppError> {
    let addon = ConverterAddOn::with_process_runner(
        config,
        Arc::new(PromptPicker::new(preset)),
        Arc::new(ConsoleNotifier::new(format)),
    )?;

    let host = Arc::new(LocalHost::from_config(&config.host));
    addon.load(host.clone()).await;
    Ok((addon, host))
}
