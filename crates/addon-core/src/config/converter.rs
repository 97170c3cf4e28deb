//! Configuration for the external STL to STEP converter.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration for the external converter executable.
///
/// The executable is always resolved as
/// `install_dir / tool_subdir / executable_name`. It is never looked up on
/// the system `PATH`.
#[derive(Debug, Clone, Validate, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Add-on installation directory.
    ///
    /// If not set, the directory of the running executable is used.
    pub install_dir: Option<PathBuf>,

    /// Directory of the converter relative to the installation directory.
    pub tool_subdir: PathBuf,

    /// File name of the converter executable.
    #[validate(length(min = 1, max = 255))]
    pub executable_name: String,

    /// Extension offered by the file picker (without the leading dot).
    #[validate(length(min = 1, max = 16))]
    pub source_extension: String,

    /// Extension of the produced interchange file (without the leading dot).
    #[validate(length(min = 1, max = 16))]
    pub target_extension: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            install_dir: None,
            tool_subdir: PathBuf::new(),
            executable_name: default_executable_name(),
            source_extension: "stl".to_string(),
            target_extension: "stp".to_string(),
        }
    }
}

fn default_executable_name() -> String {
    if cfg!(windows) {
        "converter.exe".to_string()
    } else {
        "converter".to_string()
    }
}

impl ConverterConfig {
    /// Resolve the effective installation directory.
    pub fn effective_install_dir(&self) -> PathBuf {
        if let Some(dir) = &self.install_dir {
            return dir.clone();
        }

        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Full path of the converter executable.
    pub fn converter_path(&self) -> PathBuf {
        self.effective_install_dir()
            .join(&self.tool_subdir)
            .join(&self.executable_name)
    }

    /// Source extension with any leading dot removed.
    pub fn source_ext(&self) -> &str {
        self.source_extension.trim_start_matches('.')
    }

    /// Target extension with any leading dot removed.
    pub fn target_ext(&self) -> &str {
        self.target_extension.trim_start_matches('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converter_path_layout() {
        let config = ConverterConfig {
            install_dir: Some(PathBuf::from("/opt/addon")),
            tool_subdir: PathBuf::from("bin"),
            executable_name: "stl2step".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.converter_path(),
            PathBuf::from("/opt/addon/bin/stl2step")
        );
    }

    #[test]
    fn test_empty_subdir_places_tool_next_to_addon() {
        let config = ConverterConfig {
            install_dir: Some(PathBuf::from("/opt/addon")),
            executable_name: "converter".to_string(),
            ..Default::default()
        };
        assert_eq!(config.converter_path(), PathBuf::from("/opt/addon/converter"));
    }

    #[test]
    fn test_extension_leading_dot_ignored() {
        let config = ConverterConfig {
            source_extension: ".stl".to_string(),
            target_extension: ".step".to_string(),
            ..Default::default()
        };
        assert_eq!(config.source_ext(), "stl");
        assert_eq!(config.target_ext(), "step");
    }

    #[test]
    fn test_default_install_dir_is_executable_dir() {
        let config = ConverterConfig::default();
        let exe_dir = std::env::current_exe()
            .expect("current exe")
            .parent()
            .expect("parent")
            .to_path_buf();
        assert_eq!(config.effective_install_dir(), exe_dir);
    }
}
