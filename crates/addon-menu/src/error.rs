//! Menu construction errors.

use addon_core::error::AppError;
use addon_core::types::MenuId;
use thiserror::Error;

/// Errors raised while building a menu registry.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Two entries in one definition share an id.
    #[error("Duplicate menu id {id}")]
    DuplicateId {
        /// The id that appeared more than once.
        id: MenuId,
    },
}

impl From<MenuError> for AppError {
    fn from(err: MenuError) -> Self {
        AppError::menu(err.to_string())
    }
}
