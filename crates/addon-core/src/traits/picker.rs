//! File picker collaborator.

use std::path::{Path, PathBuf};

/// Filter shown by the file picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    /// Dialog title.
    pub title: String,
    /// Human-readable filter label, e.g. `"STL Files (*.stl)"`.
    pub label: String,
    /// Accepted extension without the leading dot.
    pub extension: String,
}

impl FileFilter {
    /// Create a filter for a single extension.
    pub fn for_extension(title: impl Into<String>, extension: &str) -> Self {
        let extension = extension.trim_start_matches('.').to_ascii_lowercase();
        Self {
            title: title.into(),
            label: format!("{} Files (*.{})", extension.to_ascii_uppercase(), extension),
            extension,
        }
    }

    /// Returns whether `path` carries the filter's extension (case-insensitive).
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(&self.extension))
    }
}

/// Lets the user choose one existing source file.
pub trait FilePicker: Send + Sync + std::fmt::Debug {
    /// Returns the chosen path, or `None` if the user cancelled.
    fn pick(&self, filter: &FileFilter) -> Option<PathBuf>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_label_and_match() {
        let filter = FileFilter::for_extension("Select STL File", ".STL");
        assert_eq!(filter.extension, "stl");
        assert_eq!(filter.label, "STL Files (*.stl)");
        assert!(filter.matches(Path::new("/tmp/part.stl")));
        assert!(filter.matches(Path::new("/tmp/PART.STL")));
        assert!(!filter.matches(Path::new("/tmp/part.stp")));
        assert!(!filter.matches(Path::new("/tmp/part")));
    }
}
