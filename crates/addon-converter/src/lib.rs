//! # STL to STEP converter add-on
//!
//! Converts a user-selected STL mesh into a STEP file by running an
//! external converter executable, then asks the host to import the result.
//!
//! ## Converter contract
//!
//! The converter is invoked as `<tool> <source.stl> <dest.stp>`. A run
//! only counts as successful when the process exits with code 0 **and**
//! the destination file exists afterwards. Every other combination is
//! reported as a failed conversion together with the captured output.
//!
//! ## Menu
//!
//! The add-on contributes a "File Converters" menu with an "STL to STEP"
//! group holding two commands: an informational "About" entry and
//! "Run Converter", which drives the pipeline.

pub mod addon;
pub mod commands;
pub mod error;
pub mod executor;
pub mod menu;
pub mod outcome;
pub mod pipeline;
pub mod report;

pub use addon::ConverterAddOn;
pub use error::ConversionError;
pub use executor::{ConverterRunner, ProcessOutput, ProcessRunner};
pub use outcome::ConversionOutcome;
pub use pipeline::ConversionPipeline;
