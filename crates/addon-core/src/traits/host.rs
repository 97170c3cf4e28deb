//! Host application root object and the link that tracks it.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::result::AppResult;
use crate::types::session::SessionContext;

/// Root automation object of the host application.
///
/// Its lifetime is managed by the host. The add-on only borrows it between
/// load and unload.
#[async_trait]
pub trait HostRoot: Send + Sync + std::fmt::Debug {
    /// Resolve a session identifier into a session context.
    fn session(&self, identifier: &str) -> Option<SessionContext>;

    /// Import an interchange file into the current session.
    async fn import_file(&self, path: &Path) -> AppResult<()>;
}

/// Shared slot holding the host root while the add-on is loaded.
#[derive(Debug, Default)]
pub struct HostLink {
    /// The attached root, if any.
    root: RwLock<Option<Arc<dyn HostRoot>>>,
}

impl HostLink {
    /// Creates a link with no host attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a link that is already attached to `root`.
    pub fn attached(root: Arc<dyn HostRoot>) -> Self {
        Self {
            root: RwLock::new(Some(root)),
        }
    }

    /// Attaches the host root, replacing any previous one.
    pub async fn attach(&self, root: Arc<dyn HostRoot>) {
        let mut slot = self.root.write().await;
        *slot = Some(root);
        info!("Host root attached");
    }

    /// Detaches the host root.
    pub async fn detach(&self) {
        let mut slot = self.root.write().await;
        if slot.take().is_some() {
            info!("Host root detached");
        }
    }

    /// Returns the attached host root.
    pub async fn root(&self) -> Option<Arc<dyn HostRoot>> {
        self.root.read().await.clone()
    }

    /// Returns whether a host root is attached.
    pub async fn is_attached(&self) -> bool {
        self.root.read().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct NullHost;

    #[async_trait]
    impl HostRoot for NullHost {
        fn session(&self, identifier: &str) -> Option<SessionContext> {
            Some(SessionContext::new(identifier))
        }

        async fn import_file(&self, _path: &Path) -> AppResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_attach_and_detach() {
        let link = HostLink::new();
        assert!(!link.is_attached().await);
        assert!(link.root().await.is_none());

        link.attach(Arc::new(NullHost)).await;
        assert!(link.is_attached().await);
        let root = link.root().await.expect("attached");
        assert_eq!(
            root.session("S1").map(|s| s.identifier),
            Some("S1".to_string())
        );

        link.detach().await;
        assert!(link.root().await.is_none());
    }
}
