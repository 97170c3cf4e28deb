//! Conversion pipeline: converter resolution, process invocation, outcome
//! classification and host import.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use addon_core::config::converter::ConverterConfig;
use addon_core::traits::HostLink;
use addon_core::types::SessionContext;

use crate::error::ConversionError;
use crate::executor::ConverterRunner;
use crate::outcome::ConversionOutcome;

/// Runs one STL to STEP conversion per call.
///
/// The pipeline holds no per-run state; every call owns its own process
/// handle and output buffers.
#[derive(Debug, Clone)]
pub struct ConversionPipeline {
    /// Converter settings.
    config: ConverterConfig,
    /// Launches the converter process.
    runner: Arc<dyn ConverterRunner>,
    /// Link to the host root used for the import step.
    host: Arc<HostLink>,
}

impl ConversionPipeline {
    /// Create a new pipeline.
    pub fn new(
        config: ConverterConfig,
        runner: Arc<dyn ConverterRunner>,
        host: Arc<HostLink>,
    ) -> Self {
        Self {
            config,
            runner,
            host,
        }
    }

    /// Converter settings.
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Output path for `source`: same directory and stem, target extension.
    pub fn destination_for(&self, source: &Path) -> PathBuf {
        source.with_extension(self.config.target_ext())
    }

    /// Fixed location of the converter executable.
    pub fn converter_path(&self) -> PathBuf {
        self.config.converter_path()
    }

    /// Converts `source` and imports the result into the host.
    ///
    /// Never fails: every problem is expressed as a [`ConversionOutcome`].
    #[instrument(
        skip(self, source, session),
        fields(run_id, session = %session.identifier, source = %source.display())
    )]
    pub async fn convert(&self, source: &Path, session: &SessionContext) -> ConversionOutcome {
        tracing::Span::current().record("run_id", Uuid::now_v7().to_string());

        let outcome = match self.run(source).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(error = %e, "Conversion aborted by unexpected error");
                ConversionOutcome::UnexpectedError {
                    message: e.to_string(),
                }
            }
        };

        info!(outcome = outcome.kind(), "Conversion finished");
        outcome
    }

    async fn run(&self, source: &Path) -> Result<ConversionOutcome, ConversionError> {
        if source.file_name().is_none() {
            return Err(ConversionError::InvalidSource {
                path: source.to_path_buf(),
            });
        }

        let destination = self.destination_for(source);
        let source_is_target = source
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(self.config.target_ext()));
        if source_is_target || destination == source {
            return Err(ConversionError::DestinationIsSource {
                path: source.to_path_buf(),
            });
        }

        let executable = self.converter_path();
        let converter_present = tokio::fs::metadata(&executable)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false);
        if !converter_present {
            warn!(
                path = %executable.display(),
                "Converter executable not found"
            );
            return Ok(ConversionOutcome::ConverterMissing { path: executable });
        }

        let output = match self.runner.run(&executable, source, &destination).await {
            Ok(output) => output,
            Err(e) => {
                return Ok(ConversionOutcome::LaunchFailed {
                    executable,
                    reason: e.to_string(),
                });
            }
        };

        let output_file_exists = match tokio::fs::metadata(&destination).await {
            Ok(meta) => meta.is_file(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
            Err(e) => return Err(e.into()),
        };

        if output.exit_code != Some(0) || !output_file_exists {
            warn!(
                exit_code = ?output.exit_code,
                output_file_exists,
                destination = %destination.display(),
                "Converter did not produce a valid result"
            );
            return Ok(ConversionOutcome::ConversionFailed {
                source_path: source.to_path_buf(),
                output_path: destination,
                exit_code: output.exit_code,
                stdout: output.stdout,
                stderr: output.stderr,
                output_file_exists,
            });
        }

        let output_size_bytes = tokio::fs::metadata(&destination).await?.len();
        info!(
            destination = %destination.display(),
            output_size_bytes,
            duration_ms = output.duration_ms,
            "Converter produced output"
        );

        Ok(self.import(destination, output_size_bytes).await)
    }

    /// Hands the produced file to the host. The file stays on disk whatever
    /// the result.
    async fn import(&self, output_path: PathBuf, output_size_bytes: u64) -> ConversionOutcome {
        let Some(root) = self.host.root().await else {
            warn!("Host root unavailable, skipping import");
            return ConversionOutcome::HostUnavailable {
                output_path,
                output_size_bytes,
            };
        };

        match root.import_file(&output_path).await {
            Ok(()) => {
                info!(path = %output_path.display(), "Imported into host session");
                ConversionOutcome::ConversionSucceeded {
                    output_path,
                    output_size_bytes,
                }
            }
            Err(e) => {
                error!(
                    path = %output_path.display(),
                    error = %e,
                    "Host import failed"
                );
                ConversionOutcome::ImportFailed {
                    output_path,
                    output_size_bytes,
                    reason: e.message,
                }
            }
        }
    }
}
