//! Result taxonomy of one conversion run.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Terminal outcome of one pipeline run.
///
/// Each variant carries the diagnostics needed to explain it to the user.
/// Nothing here outlives the run that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ConversionOutcome {
    /// The user aborted file selection.
    Cancelled,

    /// The converter executable does not exist at its fixed location.
    ConverterMissing {
        /// Where the executable was expected.
        path: PathBuf,
    },

    /// The converter could not be started.
    LaunchFailed {
        /// The executable that failed to start.
        executable: PathBuf,
        /// Operating system error.
        reason: String,
    },

    /// The converter ran but did not produce a valid result.
    ConversionFailed {
        /// The file that was being converted.
        source_path: PathBuf,
        /// The expected output file.
        output_path: PathBuf,
        /// Process exit code, `None` if terminated by a signal.
        exit_code: Option<i32>,
        /// Captured standard output.
        stdout: String,
        /// Captured standard error.
        stderr: String,
        /// Whether the output file existed after the process exited.
        output_file_exists: bool,
    },

    /// The converter produced the output file and the host imported it.
    ConversionSucceeded {
        /// The produced file.
        output_path: PathBuf,
        /// Size of the produced file.
        output_size_bytes: u64,
    },

    /// The file was produced but no host root object was available.
    HostUnavailable {
        /// The produced file, left on disk.
        output_path: PathBuf,
        /// Size of the produced file.
        output_size_bytes: u64,
    },

    /// The file was produced but the host failed to import it.
    ImportFailed {
        /// The produced file, left on disk.
        output_path: PathBuf,
        /// Size of the produced file.
        output_size_bytes: u64,
        /// Error reported by the host.
        reason: String,
    },

    /// Anything else went wrong while orchestrating the run.
    UnexpectedError {
        /// Description of the failure.
        message: String,
    },
}

impl ConversionOutcome {
    /// Whether the file was converted and imported.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::ConversionSucceeded { .. })
    }

    /// Stable snake_case name of the variant, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Cancelled => "cancelled",
            Self::ConverterMissing { .. } => "converter_missing",
            Self::LaunchFailed { .. } => "launch_failed",
            Self::ConversionFailed { .. } => "conversion_failed",
            Self::ConversionSucceeded { .. } => "conversion_succeeded",
            Self::HostUnavailable { .. } => "host_unavailable",
            Self::ImportFailed { .. } => "import_failed",
            Self::UnexpectedError { .. } => "unexpected_error",
        }
    }

    /// The produced or expected output file, where the variant has one.
    pub fn output_path(&self) -> Option<&Path> {
        match self {
            Self::ConversionFailed { output_path, .. }
            | Self::ConversionSucceeded { output_path, .. }
            | Self::HostUnavailable { output_path, .. }
            | Self::ImportFailed { output_path, .. } => Some(output_path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_tag_matches_kind() {
        let outcomes = [
            ConversionOutcome::Cancelled,
            ConversionOutcome::ConverterMissing {
                path: PathBuf::from("converter"),
            },
            ConversionOutcome::ImportFailed {
                output_path: PathBuf::from("part.stp"),
                output_size_bytes: 1024,
                reason: "locked".to_string(),
            },
        ];

        for outcome in outcomes {
            let json = serde_json::to_value(&outcome).expect("serialize");
            assert_eq!(json["outcome"], outcome.kind());
        }
    }

    #[test]
    fn test_output_path_only_for_file_variants() {
        let failed = ConversionOutcome::ConversionFailed {
            source_path: PathBuf::from("part.stl"),
            output_path: PathBuf::from("part.stp"),
            exit_code: Some(2),
            stdout: String::new(),
            stderr: String::new(),
            output_file_exists: false,
        };
        assert_eq!(failed.output_path(), Some(Path::new("part.stp")));
        assert!(!failed.is_success());
        assert_eq!(ConversionOutcome::Cancelled.output_path(), None);
    }
}
