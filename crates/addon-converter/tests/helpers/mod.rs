//! Shared test helpers for integration tests.
//!
//! The system `cp`, `true` and `false` binaries stand in for the converter:
//! `cp <src> <dst>` behaves like a converter that succeeds, `true` exits 0
//! without writing anything and `false` exits 1.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use addon_converter::ConverterAddOn;
use addon_core::config::AppConfig;
use addon_core::error::AppError;
use addon_core::result::AppResult;
use addon_core::traits::{FileFilter, FilePicker, HostRoot, Notification, Notifier};
use addon_core::types::SessionContext;

/// Locate a system tool in `/bin` or `/usr/bin`.
pub fn system_tool(name: &str) -> PathBuf {
    ["/bin", "/usr/bin"]
        .iter()
        .map(|dir| Path::new(dir).join(name))
        .find(|p| p.exists())
        .unwrap_or_else(|| panic!("system tool '{name}' not found"))
}

/// Configuration whose converter is the given executable.
pub fn config_for_tool(tool: &Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.converter.install_dir = tool.parent().map(Path::to_path_buf);
    config.converter.executable_name = tool
        .file_name()
        .expect("tool file name")
        .to_string_lossy()
        .to_string();
    config
}

/// Host root that records imports and session lookups.
#[derive(Debug, Default)]
pub struct RecordingHost {
    /// Imported files, in order.
    pub imports: Mutex<Vec<PathBuf>>,
    /// Session identifiers resolved, in order.
    pub sessions: Mutex<Vec<String>>,
    /// If set, every import fails with this message.
    pub fail_with: Option<String>,
}

impl RecordingHost {
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn imports(&self) -> Vec<PathBuf> {
        self.imports.lock().expect("lock").clone()
    }
}

#[async_trait]
impl HostRoot for RecordingHost {
    fn session(&self, identifier: &str) -> Option<SessionContext> {
        self.sessions
            .lock()
            .expect("lock")
            .push(identifier.to_string());
        Some(SessionContext::new(identifier))
    }

    async fn import_file(&self, path: &Path) -> AppResult<()> {
        if let Some(message) = &self.fail_with {
            return Err(AppError::host(message.clone()));
        }
        self.imports.lock().expect("lock").push(path.to_path_buf());
        Ok(())
    }
}

/// Notifier that keeps every notification.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn titles(&self) -> Vec<String> {
        self.seen
            .lock()
            .expect("lock")
            .iter()
            .map(|n| n.title.clone())
            .collect()
    }

    pub fn last(&self) -> Notification {
        self.seen
            .lock()
            .expect("lock")
            .last()
            .cloned()
            .expect("at least one notification")
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.seen.lock().expect("lock").push(notification.clone());
    }
}

/// Picker that answers from a queue; an empty queue means cancel.
#[derive(Debug, Default)]
pub struct QueuePicker {
    answers: Mutex<VecDeque<Option<PathBuf>>>,
}

impl QueuePicker {
    pub fn new(answers: impl IntoIterator<Item = Option<PathBuf>>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
        }
    }
}

impl FilePicker for QueuePicker {
    fn pick(&self, _filter: &FileFilter) -> Option<PathBuf> {
        self.answers.lock().expect("lock").pop_front().flatten()
    }
}

/// Test add-on wired to recording collaborators.
pub struct TestAddOn {
    pub addon: ConverterAddOn,
    pub host: Arc<RecordingHost>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestAddOn {
    /// Build and load an add-on whose converter is `tool`.
    pub async fn new(tool: &Path, picks: Vec<Option<PathBuf>>, host: RecordingHost) -> Self {
        let config = config_for_tool(tool);
        let notifier = Arc::new(RecordingNotifier::default());
        let host = Arc::new(host);

        let addon = ConverterAddOn::with_process_runner(
            &config,
            Arc::new(QueuePicker::new(picks)),
            notifier.clone(),
        )
        .expect("add-on builds");
        addon.load(host.clone()).await;

        Self {
            addon,
            host,
            notifier,
        }
    }
}

/// Write an ASCII STL fixture.
pub fn write_stl(path: &Path) {
    std::fs::write(
        path,
        "solid cube\n  facet normal 0 0 1\n    outer loop\n      vertex 0 0 0\n      vertex 1 0 0\n      vertex 0 1 0\n    endloop\n  endfacet\nendsolid cube\n",
    )
    .expect("write stl fixture");
}
