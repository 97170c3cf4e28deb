//! User notification collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational message.
    Info,
    /// Something failed.
    Error,
}

/// A title and body presented to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Short caption.
    pub title: String,
    /// Message text. May span several lines.
    pub body: String,
    /// Severity.
    pub severity: Severity,
    /// When the notification was raised.
    pub raised_at: DateTime<Utc>,
}

impl Notification {
    /// Create an informational notification.
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(Severity::Info, title, body)
    }

    /// Create an error notification.
    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(Severity::Error, title, body)
    }

    fn new(severity: Severity, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            severity,
            raised_at: Utc::now(),
        }
    }
}

/// Presents notifications to the user.
pub trait Notifier: Send + Sync + std::fmt::Debug {
    /// Show a notification. Must not fail.
    fn notify(&self, notification: &Notification);
}
