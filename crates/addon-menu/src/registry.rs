//! Menu registry: a flat, id-indexed view over an immutable menu tree.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, info};

use addon_core::types::{MenuId, SessionContext};

use crate::command::{CommandResult, MenuAction};
use crate::definition::MenuDefinition;
use crate::error::MenuError;
use crate::node::MenuNode;

/// Registry of all menu entries of one add-on activation.
///
/// Built once from a [`MenuDefinition`] and read-only afterwards. To change
/// the menu, build a new registry.
#[derive(Debug)]
pub struct MenuRegistry {
    /// Id of the top-level entry.
    root: MenuId,
    /// Nodes in pre-order.
    nodes: Vec<MenuNode>,
    /// Menu id → position in `nodes`.
    index: HashMap<MenuId, usize>,
}

impl MenuRegistry {
    /// Builds a registry from a definition tree.
    ///
    /// Fails if two entries share an id.
    pub fn build(definition: impl Into<MenuDefinition>) -> Result<Self, MenuError> {
        let definition = definition.into();
        let root = definition.info().id;

        let mut registry = Self {
            root,
            nodes: Vec::new(),
            index: HashMap::new(),
        };
        registry.register(definition)?;

        info!(
            root = %root,
            entries = registry.nodes.len(),
            "Menu registry built"
        );

        Ok(registry)
    }

    /// Adds `definition` and its subtree, returning its id.
    fn register(&mut self, definition: MenuDefinition) -> Result<MenuId, MenuError> {
        let (info, action, children) = match definition {
            MenuDefinition::Group(group) => (group.info, MenuAction::None, group.children),
            MenuDefinition::Item(item) => (item.info, item.action, Vec::new()),
        };

        let id = info.id;
        let position = self.nodes.len();
        match self.index.entry(id) {
            Entry::Occupied(_) => return Err(MenuError::DuplicateId { id }),
            Entry::Vacant(slot) => {
                slot.insert(position);
            }
        }

        self.nodes.push(MenuNode {
            id,
            text: info.text,
            tooltip: info.tooltip,
            icon: info.icon,
            action,
            children: Vec::with_capacity(children.len()),
        });

        for child in children {
            let child_id = self.register(child)?;
            self.nodes[position].children.push(child_id);
        }

        Ok(id)
    }

    /// Id of the top-level entry.
    pub fn root_id(&self) -> MenuId {
        self.root
    }

    /// The top-level entry.
    pub fn root(&self) -> &MenuNode {
        &self.nodes[0]
    }

    /// Looks up an entry by id.
    pub fn lookup(&self, id: MenuId) -> Option<&MenuNode> {
        self.index.get(&id).map(|&position| &self.nodes[position])
    }

    /// Whether the entry has children. `None` if the id is unknown.
    pub fn has_children(&self, id: MenuId) -> Option<bool> {
        self.lookup(id).map(|node| !node.is_leaf())
    }

    /// Child ids in declaration order. `None` if the id is unknown.
    pub fn child_ids(&self, id: MenuId) -> Option<Vec<MenuId>> {
        self.lookup(id).map(|node| node.children().to_vec())
    }

    /// Display label. `None` if the id is unknown.
    pub fn text(&self, id: MenuId) -> Option<&str> {
        self.lookup(id).map(MenuNode::text)
    }

    /// Help string. `None` if the id is unknown.
    pub fn tooltip(&self, id: MenuId) -> Option<&str> {
        self.lookup(id).map(MenuNode::tooltip)
    }

    /// Icon resource. `None` if the id is unknown or the entry has no icon.
    pub fn icon(&self, id: MenuId) -> Option<&str> {
        self.lookup(id).and_then(MenuNode::icon)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for a built registry; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All entries in pre-order (parents before their children).
    pub fn iter(&self) -> impl Iterator<Item = &MenuNode> {
        self.nodes.iter()
    }

    /// Invokes the command bound to `id` with `session`.
    ///
    /// Unknown ids and entries without a command yield `None`. Whatever the
    /// command returns is passed back unchanged.
    pub async fn dispatch(&self, id: MenuId, session: &SessionContext) -> Option<CommandResult> {
        let node = match self.lookup(id) {
            Some(node) => node,
            None => {
                debug!(menu_id = %id, "Dispatch for unknown menu id");
                return None;
            }
        };

        match node.action() {
            MenuAction::None => {
                debug!(menu_id = %id, "Menu entry has no command");
                None
            }
            MenuAction::Bound(command) => {
                info!(
                    menu_id = %id,
                    command = %command.name(),
                    session = %session.identifier,
                    "Dispatching menu command"
                );
                command.invoke(session).await
            }
        }
    }
}
