//! Menu presentation configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Menu presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Whether menu entries expose icon resources to the host.
    #[serde(default = "default_true")]
    pub icons_enabled: bool,
    /// Directory holding icon files. Defaults to `<install_dir>/icons`.
    #[serde(default)]
    pub icon_dir: Option<PathBuf>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            icons_enabled: true,
            icon_dir: None,
        }
    }
}

fn default_true() -> bool {
    true
}
