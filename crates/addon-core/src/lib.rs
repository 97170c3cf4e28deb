//! # addon-core
//!
//! Core crate for the STL to STEP converter add-on. Contains the
//! configuration schema, typed identifiers, the session context handed
//! out by the host, the traits for host-supplied collaborators, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other add-on crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
