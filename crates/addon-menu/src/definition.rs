//! Declarative menu definitions consumed by [`MenuRegistry::build`].
//!
//! Groups and items are separate builder types so that a command can only
//! ever be attached to an item. A group may hold other groups and items;
//! an item never has children.
//!
//! [`MenuRegistry::build`]: crate::registry::MenuRegistry::build

use std::sync::Arc;

use addon_core::types::MenuId;

use crate::command::{MenuAction, MenuCommand};

/// Tooltip used when a definition does not provide one.
pub const DEFAULT_TOOLTIP: &str = "No tooltip available";

/// Fields shared by groups and items.
#[derive(Debug, Clone)]
pub struct EntryInfo {
    /// Menu id, unique within one definition tree.
    pub id: MenuId,
    /// Display label.
    pub text: String,
    /// Help string.
    pub tooltip: String,
    /// Icon resource reference.
    pub icon: Option<String>,
}

impl EntryInfo {
    fn new(id: impl Into<MenuId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            tooltip: DEFAULT_TOOLTIP.to_string(),
            icon: None,
        }
    }
}

/// A node of a menu definition tree.
#[derive(Debug, Clone)]
pub enum MenuDefinition {
    /// A container of other entries.
    Group(GroupDefinition),
    /// A selectable entry.
    Item(ItemDefinition),
}

impl MenuDefinition {
    /// Start a group definition.
    pub fn group(id: impl Into<MenuId>, text: impl Into<String>) -> GroupDefinition {
        GroupDefinition {
            info: EntryInfo::new(id, text),
            children: Vec::new(),
        }
    }

    /// Start an item definition.
    pub fn item(id: impl Into<MenuId>, text: impl Into<String>) -> ItemDefinition {
        ItemDefinition {
            info: EntryInfo::new(id, text),
            action: MenuAction::None,
        }
    }

    /// The shared entry fields.
    pub fn info(&self) -> &EntryInfo {
        match self {
            Self::Group(group) => &group.info,
            Self::Item(item) => &item.info,
        }
    }
}

/// Builder for a group entry.
#[derive(Debug, Clone)]
pub struct GroupDefinition {
    pub(crate) info: EntryInfo,
    pub(crate) children: Vec<MenuDefinition>,
}

impl GroupDefinition {
    /// Set the tooltip.
    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.info.tooltip = tooltip.into();
        self
    }

    /// Set the icon resource.
    pub fn icon(mut self, icon: Option<String>) -> Self {
        self.info.icon = icon;
        self
    }

    /// Append a child. Children are displayed in insertion order.
    pub fn child(mut self, child: impl Into<MenuDefinition>) -> Self {
        self.children.push(child.into());
        self
    }
}

/// Builder for a selectable entry.
#[derive(Debug, Clone)]
pub struct ItemDefinition {
    pub(crate) info: EntryInfo,
    pub(crate) action: MenuAction,
}

impl ItemDefinition {
    /// Set the tooltip.
    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.info.tooltip = tooltip.into();
        self
    }

    /// Set the icon resource.
    pub fn icon(mut self, icon: Option<String>) -> Self {
        self.info.icon = icon;
        self
    }

    /// Bind the command run when the item is selected.
    pub fn command(mut self, command: Arc<dyn MenuCommand>) -> Self {
        self.action = MenuAction::Bound(command);
        self
    }
}

impl From<GroupDefinition> for MenuDefinition {
    fn from(group: GroupDefinition) -> Self {
        Self::Group(group)
    }
}

impl From<ItemDefinition> for MenuDefinition {
    fn from(item: ItemDefinition) -> Self {
        Self::Item(item)
    }
}
