//! Human-readable reports for conversion outcomes.

use std::path::Path;

use addon_core::traits::Notification;

use crate::outcome::ConversionOutcome;

fn created(output_path: &Path, output_size_bytes: u64) -> String {
    format!(
        "Successfully created STEP file:\n{}\n\nSize: {:.2} KB",
        output_path.display(),
        output_size_bytes as f64 / 1024.0
    )
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

impl ConversionOutcome {
    /// Notification shown to the user for this outcome.
    ///
    /// A cancelled pick is silent and yields `None`.
    pub fn notification(&self) -> Option<Notification> {
        let notification = match self {
            Self::Cancelled => return None,
            Self::ConverterMissing { path } => Notification::error(
                "Executable Not Found",
                format!(
                    "Converter executable not found at the expected location:\n{}",
                    path.display()
                ),
            ),
            Self::LaunchFailed { executable, reason } => Notification::error(
                "Process Start Error",
                format!(
                    "Failed to start the external conversion process '{}':\n{}",
                    executable.display(),
                    reason
                ),
            ),
            Self::ConversionFailed {
                source_path,
                output_path,
                exit_code,
                stdout,
                stderr,
                output_file_exists,
            } => {
                let mut body = format!("Failed to convert '{}'.\n", file_name(source_path));
                match exit_code {
                    Some(code) => body.push_str(&format!("\nProcess exited with code: {code}.")),
                    None => body.push_str("\nProcess was terminated by a signal."),
                }
                if !stdout.trim().is_empty() {
                    body.push_str(&format!("\n\nStandard Output:\n{stdout}"));
                }
                if !stderr.trim().is_empty() {
                    body.push_str(&format!("\n\nStandard Error:\n{stderr}"));
                }
                if !output_file_exists {
                    body.push_str(&format!(
                        "\n\nOutput file was not created: {}",
                        output_path.display()
                    ));
                }
                Notification::error("Conversion Failed", body)
            }
            Self::ConversionSucceeded {
                output_path,
                output_size_bytes,
            } => Notification::info(
                "Conversion Successful",
                created(output_path, *output_size_bytes),
            ),
            Self::HostUnavailable {
                output_path,
                output_size_bytes,
            } => Notification::error(
                "Import Error",
                format!(
                    "{}\n\nCould not get the host root object to import '{}'.",
                    created(output_path, *output_size_bytes),
                    file_name(output_path)
                ),
            ),
            Self::ImportFailed {
                output_path,
                output_size_bytes,
                reason,
            } => Notification::error(
                "Import Error",
                format!(
                    "{}\n\nAn error occurred while importing the STEP file '{}':\n{}",
                    created(output_path, *output_size_bytes),
                    file_name(output_path),
                    reason
                ),
            ),
            Self::UnexpectedError { message } => Notification::error(
                "Unhandled Exception",
                format!("An unexpected error occurred during the conversion process:\n{message}"),
            ),
        };

        Some(notification)
    }
}
