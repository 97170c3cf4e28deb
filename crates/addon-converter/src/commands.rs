//! Menu commands contributed by the add-on.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use async_trait::async_trait;
use futures::FutureExt;
use tracing::{debug, error, info};

use addon_core::traits::{FileFilter, FilePicker, Notification, Notifier};
use addon_core::types::SessionContext;
use addon_menu::{CommandResult, MenuCommand};

use crate::outcome::ConversionOutcome;
use crate::pipeline::ConversionPipeline;

/// Caption of the about box.
pub const ABOUT_TITLE: &str = "About Add-on";

/// Text of the about box.
pub const ABOUT_TEXT: &str = "This is a demonstration add-on for converting STL files to STEP format.";

/// Shows static information about the add-on.
#[derive(Debug)]
pub struct AboutCommand {
    notifier: Arc<dyn Notifier>,
}

impl AboutCommand {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }
}

#[async_trait]
impl MenuCommand for AboutCommand {
    fn name(&self) -> &str {
        "about"
    }

    async fn invoke(&self, _session: &SessionContext) -> Option<CommandResult> {
        self.notifier
            .notify(&Notification::info(ABOUT_TITLE, ABOUT_TEXT));
        None
    }
}

/// Asks for an STL file, converts it and reports the outcome.
///
/// The host receives no result either way; the user learns about the
/// outcome through the notifier.
#[derive(Debug)]
pub struct RunConverterCommand {
    pipeline: ConversionPipeline,
    picker: Arc<dyn FilePicker>,
    notifier: Arc<dyn Notifier>,
}

impl RunConverterCommand {
    pub fn new(
        pipeline: ConversionPipeline,
        picker: Arc<dyn FilePicker>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            pipeline,
            picker,
            notifier,
        }
    }

    /// The pipeline this command drives.
    pub fn pipeline(&self) -> &ConversionPipeline {
        &self.pipeline
    }

    /// File filter offered to the picker.
    pub fn filter(&self) -> FileFilter {
        let ext = self.pipeline.config().source_ext();
        FileFilter::for_extension(
            format!("Select {} File for Conversion", ext.to_ascii_uppercase()),
            ext,
        )
    }

    /// Runs one pick-convert-report cycle and returns the outcome.
    ///
    /// Panics raised while picking or converting are caught and reported
    /// as [`ConversionOutcome::UnexpectedError`].
    pub async fn execute(&self, session: &SessionContext) -> ConversionOutcome {
        let filter = self.filter();
        let run = async {
            let Some(source) = self.picker.pick(&filter) else {
                return ConversionOutcome::Cancelled;
            };
            self.pipeline.convert(&source, session).await
        };

        let outcome = match AssertUnwindSafe(run).catch_unwind().await {
            Ok(outcome) => outcome,
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                error!(message = %message, "Conversion command panicked");
                ConversionOutcome::UnexpectedError { message }
            }
        };

        match outcome.notification() {
            Some(notification) => self.notifier.notify(&notification),
            None => debug!("File selection cancelled"),
        }

        outcome
    }
}

#[async_trait]
impl MenuCommand for RunConverterCommand {
    fn name(&self) -> &str {
        "run_converter"
    }

    async fn invoke(&self, session: &SessionContext) -> Option<CommandResult> {
        let outcome = self.execute(session).await;
        info!(
            session = %session.identifier,
            outcome = outcome.kind(),
            "Run Converter finished"
        );
        None
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
