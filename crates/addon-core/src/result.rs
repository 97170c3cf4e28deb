//! Convenience result type alias for the add-on.

use crate::error::AppError;

/// A specialized `Result` type for add-on operations.
pub type AppResult<T> = Result<T, AppError>;
