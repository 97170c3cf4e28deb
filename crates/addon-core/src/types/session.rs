//! Session context handed to menu commands.

use serde::{Deserialize, Serialize};

/// Opaque handle to the user's active host session.
///
/// Produced by the host root from a session identifier at dispatch time.
/// The menu registry passes it through to commands without looking at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Identifier the host uses for the session.
    pub identifier: String,
    /// Name of the active document, if the host reports one.
    pub document: Option<String>,
}

impl SessionContext {
    /// Create a session context for the given identifier.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            document: None,
        }
    }

    /// Attach the active document name.
    pub fn with_document(mut self, document: impl Into<String>) -> Self {
        self.document = Some(document.into());
        self
    }
}
