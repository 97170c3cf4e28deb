//! Direct conversion without the menu.

use std::path::PathBuf;

use clap::Args;

use addon_core::config::AppConfig;
use addon_core::error::AppError;
use addon_core::traits::{HostRoot, Notifier};

use crate::host::ConsoleNotifier;
use crate::output::{self, OutputFormat};

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// STL file to convert
    pub file: PathBuf,

    /// Session identifier the result is imported into
    #[arg(short, long)]
    pub session: Option<String>,
}

/// Execute the convert command
pub async fn execute(
    args: &ConvertArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let (addon, host) = super::load_addon(config, format, None).await?;

    let identifier = args
        .session
        .as_deref()
        .unwrap_or(&config.host.default_session);
    let session = host
        .session(identifier)
        .ok_or_else(|| AppError::validation(format!("Unknown session '{}'", identifier)))?;

    let pipeline = addon.run_converter().pipeline();
    if format == OutputFormat::Table {
        output::print_kv("Converter", &pipeline.converter_path().display().to_string());
        output::print_kv("Source", &args.file.display().to_string());
        output::print_kv(
            "Destination",
            &pipeline.destination_for(&args.file).display().to_string(),
        );
        output::print_kv("Import directory", &host.import_dir().display().to_string());
    }

    let outcome = pipeline.convert(&args.file, &session).await;

    match format {
        OutputFormat::Json => output::print_item(&outcome, format),
        OutputFormat::Table => {
            if let Some(notification) = outcome.notification() {
                ConsoleNotifier::new(format).notify(&notification);
            }
        }
    }

    if outcome.is_success() {
        Ok(())
    } else {
        Err(AppError::internal(format!(
            "Conversion finished with outcome '{}'",
            outcome.kind()
        )))
    }
}
