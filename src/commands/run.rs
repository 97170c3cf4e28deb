//! Interactive host loop.

use clap::Args;
use tracing::info;

use addon_core::config::AppConfig;
use addon_core::error::AppError;
use addon_core::types::MenuId;
use addon_menu::AddOnInterface;

use crate::output::{self, OutputFormat};

/// Arguments for the run command
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Session identifier passed to the add-on
    #[arg(short, long)]
    pub session: Option<String>,
}

/// A selectable line in the current menu level.
enum Choice {
    Entry(MenuId),
    Back,
    Quit,
}

fn choices(iface: &AddOnInterface, level: MenuId, nested: bool) -> (Vec<String>, Vec<Choice>) {
    let mut labels = Vec::new();
    let mut choices = Vec::new();

    for id in iface.sub_menu_items(level).unwrap_or_default() {
        let text = iface.menu_item_text(id).unwrap_or_default();
        let label = if iface.has_sub_menus(id) {
            format!("{} >", text)
        } else {
            format!("{}  ({})", text, iface.menu_item_tooltip(id).unwrap_or_default())
        };
        labels.push(label);
        choices.push(Choice::Entry(id));
    }

    if nested {
        labels.push("Back".to_string());
        choices.push(Choice::Back);
    }
    labels.push("Quit".to_string());
    choices.push(Choice::Quit);

    (labels, choices)
}

/// Execute the run command
pub async fn execute(
    args: &RunArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let (addon, _host) = super::load_addon(config, format, None).await?;
    let iface = addon.interface();
    let session = args
        .session
        .clone()
        .unwrap_or_else(|| config.host.default_session.clone());

    info!(session = %session, "Interactive host started");

    let mut path = vec![iface.root_menu_item()];
    loop {
        let level = *path.last().unwrap_or(&iface.root_menu_item());
        let (labels, entries) = choices(&iface, level, path.len() > 1);

        let picked = dialoguer::Select::new()
            .with_prompt(iface.menu_item_text(level).unwrap_or_default())
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;

        let Some(index) = picked else {
            break;
        };

        match entries.get(index) {
            Some(Choice::Entry(id)) if iface.has_sub_menus(*id) => path.push(*id),
            Some(Choice::Entry(id)) => {
                if let Some(result) = iface.invoke_command(*id, &session).await {
                    output::print_item(&result, format);
                }
            }
            Some(Choice::Back) => {
                path.pop();
            }
            Some(Choice::Quit) | None => break,
        }
    }

    addon.unload().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use addon_converter::ConverterAddOn;
    use addon_converter::menu::{ROOT_MENU_ID, STL_STEP_GROUP_ID};

    use super::*;
    use crate::host::{ConsoleNotifier, PromptPicker};

    #[test]
    fn test_choices_add_navigation() {
        let addon = ConverterAddOn::with_process_runner(
            &AppConfig::default(),
            Arc::new(PromptPicker::default()),
            Arc::new(ConsoleNotifier::new(OutputFormat::Table)),
        )
        .expect("build");
        let iface = addon.interface();

        let (labels, _) = choices(&iface, ROOT_MENU_ID, false);
        assert_eq!(labels, vec!["STL to STEP >".to_string(), "Quit".to_string()]);

        let (labels, entries) = choices(&iface, STL_STEP_GROUP_ID, true);
        assert_eq!(labels.len(), 4);
        assert!(labels[1].starts_with("Run Converter"));
        assert!(matches!(entries[2], Choice::Back));
    }
}
