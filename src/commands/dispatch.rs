//! Invoke a single menu entry.

use std::path::PathBuf;

use clap::Args;

use addon_core::config::AppConfig;
use addon_core::error::AppError;
use addon_core::types::MenuId;

use crate::output::{self, OutputFormat};

/// Arguments for the dispatch command
#[derive(Debug, Args)]
pub struct DispatchArgs {
    /// Menu id to invoke
    pub id: MenuId,

    /// Session identifier passed to the add-on
    #[arg(short, long)]
    pub session: Option<String>,

    /// Pre-answer the file picker with this path
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Execute the dispatch command
pub async fn execute(
    args: &DispatchArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let (addon, _host) = super::load_addon(config, format, args.file.clone()).await?;
    let iface = addon.interface();

    if iface.registry().lookup(args.id).is_none() {
        return Err(AppError::not_found(format!("Menu id {} does not exist", args.id)));
    }
    if iface.has_sub_menus(args.id) {
        output::print_warning(&format!(
            "Menu id {} is a group; nothing to invoke",
            args.id
        ));
    }

    let session = args
        .session
        .as_deref()
        .unwrap_or(&config.host.default_session);

    match iface.invoke_command(args.id, session).await {
        Some(result) => output::print_item(&result, format),
        None => tracing::debug!(menu_id = %args.id, "Command returned no result"),
    }
    Ok(())
}
