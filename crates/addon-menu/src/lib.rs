//! # addon-menu
//!
//! Hierarchical command menu for the converter add-on. Provides:
//!
//! - A declarative menu definition builder (groups and leaf items)
//! - An immutable, id-indexed registry built once from that definition
//! - Lookup-then-invoke dispatch of commands bound to leaf items
//! - The host-facing [`AddOnInterface`] that answers structural queries
//!   and invokes commands by menu id and session identifier

pub mod command;
pub mod definition;
pub mod error;
pub mod interface;
pub mod node;
pub mod registry;

pub use command::{CommandResult, MenuAction, MenuCommand};
pub use definition::MenuDefinition;
pub use error::MenuError;
pub use interface::{AddOnInterface, MenuState};
pub use node::MenuNode;
pub use registry::MenuRegistry;
