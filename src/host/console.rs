//! Notifier that writes to the terminal.

use tracing::{info, warn};

use addon_core::traits::{Notification, Notifier, Severity};

use crate::output::{self, OutputFormat};

/// Prints notifications and mirrors them into the log.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleNotifier {
    format: OutputFormat,
}

impl ConsoleNotifier {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: &Notification) {
        match notification.severity {
            Severity::Info => info!(title = %notification.title, "Notification"),
            Severity::Error => warn!(title = %notification.title, "Error notification"),
        }

        if self.format == OutputFormat::Json {
            output::print_item(notification, self.format);
            return;
        }

        match notification.severity {
            Severity::Info => output::print_success(&notification.title),
            Severity::Error => output::print_error(&notification.title),
        }
        output::print_block(&notification.body);
    }
}
