//! File picker that reads a path from the terminal.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use addon_core::traits::{FileFilter, FilePicker};

use crate::output;

/// Picks a source file from a preset path or an interactive prompt.
///
/// A preset is used for the first pick only. Prompts repeat until the
/// answer names an existing file with the filter's extension; an empty
/// answer cancels.
#[derive(Debug, Default)]
pub struct PromptPicker {
    preset: Mutex<Option<PathBuf>>,
}

impl PromptPicker {
    pub fn new(preset: Option<PathBuf>) -> Self {
        Self {
            preset: Mutex::new(preset),
        }
    }

    fn take_preset(&self) -> Option<PathBuf> {
        self.preset.lock().ok().and_then(|mut p| p.take())
    }

    fn prompt(filter: &FileFilter) -> Option<PathBuf> {
        loop {
            let answer: String = match dialoguer::Input::new()
                .with_prompt(format!("{} [{}] (Enter to cancel)", filter.title, filter.label))
                .allow_empty(true)
                .interact_text()
            {
                Ok(answer) => answer,
                Err(e) => {
                    output::print_error(&format!("Input error: {}", e));
                    return None;
                }
            };

            let answer = answer.trim();
            if answer.is_empty() {
                return None;
            }

            let path = PathBuf::from(answer);
            match check(&path, filter) {
                Ok(()) => return Some(path),
                Err(reason) => output::print_error(&reason),
            }
        }
    }
}

/// Checks that `path` is an existing file accepted by `filter`.
fn check(path: &Path, filter: &FileFilter) -> Result<(), String> {
    if !filter.matches(path) {
        return Err(format!("'{}' is not one of {}", path.display(), filter.label));
    }
    if !path.is_file() {
        return Err(format!("File '{}' does not exist", path.display()));
    }
    Ok(())
}

impl FilePicker for PromptPicker {
    fn pick(&self, filter: &FileFilter) -> Option<PathBuf> {
        let Some(preset) = self.take_preset() else {
            return Self::prompt(filter);
        };

        match check(&preset, filter) {
            Ok(()) => {
                debug!(path = %preset.display(), "Using preset source file");
                Some(preset)
            }
            Err(reason) => {
                output::print_error(&reason);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stl_filter() -> FileFilter {
        FileFilter::for_extension("Select STL File for Conversion", "stl")
    }

    #[test]
    fn test_preset_is_used_once() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = temp.path().join("part.STL");
        std::fs::write(&source, "solid part\nendsolid part\n").expect("write");

        let picker = PromptPicker::new(Some(source.clone()));
        assert_eq!(picker.pick(&stl_filter()), Some(source));
        assert!(picker.take_preset().is_none());
    }

    #[test]
    fn test_preset_must_exist_and_match() {
        let temp = tempfile::tempdir().expect("tempdir");
        let wrong_ext = temp.path().join("part.obj");
        std::fs::write(&wrong_ext, "o part").expect("write");

        assert!(check(&wrong_ext, &stl_filter()).is_err());
        assert!(check(&temp.path().join("absent.stl"), &stl_filter()).is_err());

        let picker = PromptPicker::new(Some(temp.path().join("absent.stl")));
        assert_eq!(picker.pick(&stl_filter()), None);
    }
}
