//! Host-facing add-on interface.
//!
//! The host renders the menu by probing ids (root item, children, text,
//! tooltip, icon) and runs a leaf by handing back its id together with a
//! session identifier. Every query treats an unknown id as absent.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use addon_core::traits::HostLink;
use addon_core::types::MenuId;

use crate::command::CommandResult;
use crate::registry::MenuRegistry;

/// Enablement state of a menu entry. Every entry of this add-on is
/// always selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuState {
    /// Selectable.
    Enabled,
}

/// The interface the host queries and invokes.
#[derive(Debug, Clone)]
pub struct AddOnInterface {
    /// The menu registry.
    registry: Arc<MenuRegistry>,
    /// Link to the host root used to resolve sessions.
    host: Arc<HostLink>,
}

impl AddOnInterface {
    /// Creates the interface over a built registry.
    pub fn new(registry: Arc<MenuRegistry>, host: Arc<HostLink>) -> Self {
        Self { registry, host }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &MenuRegistry {
        &self.registry
    }

    pub fn root_menu_item(&self) -> MenuId {
        self.registry.root_id()
    }

    /// Whether the entry has sub-entries. Unknown ids report `false`.
    pub fn has_sub_menus(&self, id: MenuId) -> bool {
        self.registry.has_children(id).unwrap_or(false)
    }

    pub fn sub_menu_items(&self, id: MenuId) -> Option<Vec<MenuId>> {
        self.registry.child_ids(id)
    }

    pub fn menu_item_text(&self, id: MenuId) -> Option<&str> {
        self.registry.text(id)
    }

    pub fn menu_item_tooltip(&self, id: MenuId) -> Option<&str> {
        self.registry.tooltip(id)
    }

    pub fn menu_icon(&self, id: MenuId) -> Option<&str> {
        self.registry.icon(id)
    }

    /// Every entry is always enabled.
    pub fn menu_item_state(&self, _id: MenuId, _session_identifier: &str) -> MenuState {
        MenuState::Enabled
    }

    /// No entry opens a popup.
    pub fn popup_menu(&self, _id: MenuId) -> bool {
        false
    }

    /// Resolves the session through the host and dispatches the entry.
    ///
    /// Returns `None` without dispatching if no host is attached or the
    /// host does not know the session.
    pub async fn invoke_command(
        &self,
        id: MenuId,
        session_identifier: &str,
    ) -> Option<CommandResult> {
        let Some(root) = self.host.root().await else {
            warn!(menu_id = %id, "Invoke requested while no host is attached");
            return None;
        };

        let Some(session) = root.session(session_identifier) else {
            warn!(
                menu_id = %id,
                session = %session_identifier,
                "Host does not know the requested session"
            );
            return None;
        };

        self.registry.dispatch(id, &session).await
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use addon_core::result::AppResult;
    use addon_core::traits::HostRoot;
    use addon_core::types::SessionContext;

    use super::*;
    use crate::command::MenuCommand;
    use crate::definition::MenuDefinition;

    #[derive(Debug)]
    struct KnownSessions(Vec<&'static str>);

    #[async_trait]
    impl HostRoot for KnownSessions {
        fn session(&self, identifier: &str) -> Option<SessionContext> {
            self.0
                .contains(&identifier)
                .then(|| SessionContext::new(identifier).with_document("part.AD_PRT"))
        }

        async fn import_file(&self, _path: &Path) -> AppResult<()> {
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct EchoCommand {
        seen: Mutex<Vec<SessionContext>>,
    }

    #[async_trait]
    impl MenuCommand for EchoCommand {
        fn name(&self) -> &str {
            "echo"
        }

        async fn invoke(&self, session: &SessionContext) -> Option<CommandResult> {
            self.seen
                .lock()
                .expect("lock")
                .push(session.clone());
            Some(CommandResult::new("echo", json!(session.identifier)))
        }
    }

    fn interface(host: Arc<HostLink>, command: Arc<EchoCommand>) -> AddOnInterface {
        let registry = MenuRegistry::build(
            MenuDefinition::group(401, "File Converters")
                .child(MenuDefinition::item(9089, "Echo").command(command)),
        )
        .expect("build");
        AddOnInterface::new(Arc::new(registry), host)
    }

    #[test]
    fn test_structure_queries() {
        let iface = interface(Arc::new(HostLink::new()), Arc::new(EchoCommand::default()));

        assert_eq!(iface.root_menu_item(), MenuId(401));
        assert!(iface.has_sub_menus(MenuId(401)));
        assert!(!iface.has_sub_menus(MenuId(9089)));
        assert!(!iface.has_sub_menus(MenuId(1)));
        assert_eq!(iface.sub_menu_items(MenuId(401)), Some(vec![MenuId(9089)]));
        assert_eq!(iface.sub_menu_items(MenuId(1)), None);
        assert_eq!(iface.menu_item_text(MenuId(9089)), Some("Echo"));
        assert_eq!(iface.menu_icon(MenuId(9089)), None);
        assert_eq!(iface.menu_item_state(MenuId(9089), "S1"), MenuState::Enabled);
        assert!(!iface.popup_menu(MenuId(401)));
    }

    #[tokio::test]
    async fn test_invoke_resolves_session_through_host() {
        let host = Arc::new(HostLink::attached(Arc::new(KnownSessions(vec!["S1"]))));
        let command = Arc::new(EchoCommand::default());
        let iface = interface(host, command.clone());

        let result = iface.invoke_command(MenuId(9089), "S1").await;
        assert_eq!(result.map(|r| r.data), Some(json!("S1")));

        let seen = command.seen.lock().expect("lock");
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].document.as_deref(), Some("part.AD_PRT"));
    }

    #[tokio::test]
    async fn test_invoke_without_host_or_session_does_not_dispatch() {
        let host = Arc::new(HostLink::new());
        let command = Arc::new(EchoCommand::default());
        let iface = interface(host.clone(), command.clone());

        assert!(iface.invoke_command(MenuId(9089), "S1").await.is_none());

        host.attach(Arc::new(KnownSessions(vec!["S1"]))).await;
        assert!(iface.invoke_command(MenuId(9089), "Other").await.is_none());

        assert!(command.seen.lock().expect("lock").is_empty());
    }
}
