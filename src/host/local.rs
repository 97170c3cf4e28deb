//! Host root backed by a local import directory.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::{debug, info};

use addon_core::config::host::HostConfig;
use addon_core::error::AppError;
use addon_core::result::AppResult;
use addon_core::traits::HostRoot;
use addon_core::types::SessionContext;

/// Host root that "imports" STEP files by copying them into a directory.
///
/// Any non-blank session identifier is accepted.
#[derive(Debug)]
pub struct LocalHost {
    import_dir: PathBuf,
    imported: Mutex<Vec<PathBuf>>,
}

impl LocalHost {
    pub fn new(import_dir: impl Into<PathBuf>) -> Self {
        Self {
            import_dir: import_dir.into(),
            imported: Mutex::new(Vec::new()),
        }
    }

    pub fn from_config(config: &HostConfig) -> Self {
        Self::new(config.import_dir.clone())
    }

    /// Directory that imports are copied into.
    pub fn import_dir(&self) -> &Path {
        &self.import_dir
    }

    /// Copies made so far, in order.
    pub fn imported(&self) -> Vec<PathBuf> {
        self.imported
            .lock()
            .map(|list| list.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl HostRoot for LocalHost {
    fn session(&self, identifier: &str) -> Option<SessionContext> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            debug!("Rejected blank session identifier");
            return None;
        }
        Some(SessionContext::new(identifier).with_document(format!("{identifier}.prt")))
    }

    async fn import_file(&self, path: &Path) -> AppResult<()> {
        let file_name = path
            .file_name()
            .ok_or_else(|| AppError::host(format!("'{}' has no file name", path.display())))?;

        tokio::fs::create_dir_all(&self.import_dir).await.map_err(|e| {
            AppError::host(format!(
                "Cannot create import directory '{}': {e}",
                self.import_dir.display()
            ))
        })?;

        let target = self.import_dir.join(file_name);
        tokio::fs::copy(path, &target)
            .await
            .map_err(|e| AppError::host(format!("Cannot import '{}': {e}", path.display())))?;

        info!(
            source = %path.display(),
            target = %target.display(),
            "STEP file imported"
        );
        if let Ok(mut list) = self.imported.lock() {
            list.push(target);
        }
        Ok(())
    }
}
