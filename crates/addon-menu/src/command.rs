//! Commands bound to leaf menu items.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use addon_core::types::SessionContext;

/// Result handed back to the host by a command.
///
/// The registry never inspects it; it only propagates presence or absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandResult {
    /// Name of the command that produced the result.
    pub command: String,
    /// Command-specific data.
    pub data: Value,
}

impl CommandResult {
    /// Create a new command result.
    pub fn new(command: impl Into<String>, data: Value) -> Self {
        Self {
            command: command.into(),
            data,
        }
    }
}

/// Behavior invoked when the user selects a leaf menu item.
///
/// A command owns its whole failure domain: anything that goes wrong must
/// be handled and reported inside `invoke`, since the registry passes the
/// return value through untouched.
#[async_trait]
pub trait MenuCommand: Send + Sync + fmt::Debug {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Runs the command for the given session.
    async fn invoke(&self, session: &SessionContext) -> Option<CommandResult>;
}

/// What selecting a menu entry does.
#[derive(Clone, Default)]
pub enum MenuAction {
    /// Nothing. Groups always carry this.
    #[default]
    None,
    /// Invoke the bound command.
    Bound(Arc<dyn MenuCommand>),
}

impl MenuAction {
    /// Returns whether a command is bound.
    pub fn is_bound(&self) -> bool {
        matches!(self, Self::Bound(_))
    }

    /// Name of the bound command, if any.
    pub fn command_name(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Bound(cmd) => Some(cmd.name()),
        }
    }
}

impl fmt::Debug for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Bound(cmd) => write!(f, "Bound({})", cmd.name()),
        }
    }
}
