//! Menu nodes stored in the registry.

use addon_core::types::MenuId;

use crate::command::MenuAction;

/// One entry of a built menu tree.
///
/// Nodes are created by the registry and never change afterwards. Children
/// are referenced by id; resolve them through the registry.
#[derive(Debug, Clone)]
pub struct MenuNode {
    pub(crate) id: MenuId,
    pub(crate) text: String,
    pub(crate) tooltip: String,
    pub(crate) icon: Option<String>,
    pub(crate) action: MenuAction,
    pub(crate) children: Vec<MenuId>,
}

impl MenuNode {
    pub fn id(&self) -> MenuId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn action(&self) -> &MenuAction {
        &self.action
    }

    /// Child ids in display order.
    pub fn children(&self) -> &[MenuId] {
        &self.children
    }

    /// A node without children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
