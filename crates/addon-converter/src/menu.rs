//! The add-on's menu tree.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use addon_core::config::menu::MenuConfig;
use addon_core::types::MenuId;
use addon_menu::definition::GroupDefinition;
use addon_menu::{MenuCommand, MenuDefinition};

/// "File Converters" top-level entry.
pub const ROOT_MENU_ID: MenuId = MenuId(401);
/// "STL to STEP" group.
pub const STL_STEP_GROUP_ID: MenuId = MenuId(9088);
/// "About" entry.
pub const ABOUT_ID: MenuId = MenuId(9089);
/// "Run Converter" entry.
pub const RUN_CONVERTER_ID: MenuId = MenuId(9090);

/// Resolves icon resources, or drops them when icons are disabled.
#[derive(Debug, Clone)]
struct IconSet {
    dir: Option<PathBuf>,
}

impl IconSet {
    fn new(config: &MenuConfig, install_dir: &Path) -> Self {
        let dir = config.icons_enabled.then(|| {
            config
                .icon_dir
                .clone()
                .unwrap_or_else(|| install_dir.join("icons"))
        });
        Self { dir }
    }

    fn get(&self, file: &str) -> Option<String> {
        self.dir
            .as_ref()
            .map(|dir| dir.join(file).to_string_lossy().to_string())
    }
}

/// Builds the menu definition with the given commands bound to its leaves.
pub fn definition(
    config: &MenuConfig,
    install_dir: &Path,
    about: Arc<dyn MenuCommand>,
    run_converter: Arc<dyn MenuCommand>,
) -> GroupDefinition {
    let icons = IconSet::new(config, install_dir);

    let stl_step = MenuDefinition::group(STL_STEP_GROUP_ID, "STL to STEP")
        .icon(icons.get("stl_step.ico"))
        .child(
            MenuDefinition::item(ABOUT_ID, "About")
                .tooltip("Information about the STL to STEP converter")
                .icon(icons.get("about.ico"))
                .command(about),
        )
        .child(
            MenuDefinition::item(RUN_CONVERTER_ID, "Run Converter")
                .tooltip("Convert an STL file to a STEP file")
                .icon(icons.get("run_converter.ico"))
                .command(run_converter),
        );

    MenuDefinition::group(ROOT_MENU_ID, "File Converters")
        .tooltip("A collection of file conversion utilities")
        .icon(icons.get("file_converters.ico"))
        .child(stl_step)
}
