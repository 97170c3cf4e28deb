//! Local host harness configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Settings used by the command-line host that stands in for the CAD
/// application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfig {
    /// Directory that imported STEP files are copied into.
    #[serde(default = "default_import_dir")]
    pub import_dir: PathBuf,
    /// Session identifier used when none is given on the command line.
    #[serde(default = "default_session")]
    pub default_session: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            import_dir: default_import_dir(),
            default_session: default_session(),
        }
    }
}

fn default_import_dir() -> PathBuf {
    PathBuf::from("data/imports")
}

fn default_session() -> String {
    "Session1".to_string()
}
