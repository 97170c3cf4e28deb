//! Internal orchestration errors of the conversion pipeline.
//!
//! None of these leave the pipeline as errors: they are all reported as
//! [`ConversionOutcome::UnexpectedError`].
//!
//! [`ConversionOutcome::UnexpectedError`]: crate::outcome::ConversionOutcome::UnexpectedError

use std::path::PathBuf;

use thiserror::Error;

/// Failures the pipeline does not anticipate as regular outcomes.
#[derive(Debug, Error)]
pub enum ConversionError {
    /// The source path has no file name.
    #[error("Source path has no file name: {path}")]
    InvalidSource {
        /// The offending path.
        path: PathBuf,
    },

    /// The source already has the target extension.
    #[error("Source file already has the target extension: {path}")]
    DestinationIsSource {
        /// The source path.
        path: PathBuf,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
