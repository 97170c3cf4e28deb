//! Configuration management commands.

use std::path::Path;

use clap::{Args, Subcommand};

use addon_core::config::AppConfig;
use addon_core::error::AppError;
use addon_core::result::AppResult;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the merged configuration
    Show,
    /// Validate the merged configuration
    Validate,
    /// Generate a default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/generated.toml")]
        output: String,
    },
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    loaded: AppResult<AppConfig>,
    explicit: Option<&Path>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let source = explicit
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "config/default.toml".to_string());

    match &args.command {
        ConfigCommand::Show => {
            let config = loaded?;
            output::print_item(&config, format);
        }
        ConfigCommand::Validate => match loaded {
            Ok(config) => {
                output::print_success(&format!("Configuration '{}' is valid", source));
                output::print_kv(
                    "Converter",
                    &config.converter.converter_path().display().to_string(),
                );
                output::print_kv(
                    "Conversion",
                    &format!(
                        ".{} -> .{}",
                        config.converter.source_ext(),
                        config.converter.target_ext()
                    ),
                );
                output::print_kv("Icons", &config.menu.icons_enabled.to_string());
                output::print_kv("Import directory", &config.host.import_dir.display().to_string());
                output::print_kv("Log level", &config.logging.level);
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {}", e));
                return Err(e);
            }
        },
        ConfigCommand::Generate { output: out_path } => {
            let default_config = include_str!("../../config/default.toml");

            if let Some(parent) = Path::new(out_path).parent() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| AppError::internal(format!("Failed to create dir: {}", e)))?;
            }

            tokio::fs::write(out_path, default_config)
                .await
                .map_err(|e| AppError::internal(format!("Failed to write config: {}", e)))?;

            output::print_success(&format!("Default config written to '{}'", out_path));
        }
    }

    Ok(())
}
