//! Menu tree listing.

use serde::Serialize;
use tabled::Tabled;

use addon_core::config::AppConfig;
use addon_core::error::AppError;
use addon_core::types::MenuId;
use addon_menu::AddOnInterface;

use crate::output::{self, OutputFormat};

/// Menu entry display row
#[derive(Debug, Serialize, Tabled)]
pub struct MenuRow {
    /// Menu id
    pub id: i32,
    /// Nesting depth, root is 0
    pub depth: usize,
    /// Label, indented by depth
    pub text: String,
    /// Tooltip
    pub tooltip: String,
    /// Icon resource
    pub icon: String,
    /// Bound command
    pub command: String,
}

/// Walk the tree through the host interface, in display order
pub fn rows(iface: &AddOnInterface) -> Vec<MenuRow> {
    let mut rows = Vec::new();
    collect(iface, iface.root_menu_item(), 0, &mut rows);
    rows
}

fn collect(iface: &AddOnInterface, id: MenuId, depth: usize, rows: &mut Vec<MenuRow>) {
    let text = iface.menu_item_text(id).unwrap_or_default();
    rows.push(MenuRow {
        id: id.get(),
        depth,
        text: format!("{}{}", "  ".repeat(depth), text),
        tooltip: iface.menu_item_tooltip(id).unwrap_or_default().to_string(),
        icon: iface.menu_icon(id).unwrap_or("-").to_string(),
        command: iface
            .registry()
            .lookup(id)
            .and_then(|node| node.action().command_name())
            .unwrap_or("-")
            .to_string(),
    });

    if iface.has_sub_menus(id) {
        for child in iface.sub_menu_items(id).unwrap_or_default() {
            collect(iface, child, depth + 1, rows);
        }
    }
}

/// Execute the menu command
pub async fn execute(config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let (addon, _host) = super::load_addon(config, format, None).await?;
    output::print_list(&rows(&addon.interface()), format);
    Ok(())
}
