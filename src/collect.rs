// File collection: every file whose extension has a rule, read whole

use crate::rules::ExtensionMap;
use crate::tree::is_hidden;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// A file selected for the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedFile {
    /// Path relative to the project root
    pub relative_path: String,
    /// Code fence label from the extension rules
    pub label: String,
    pub content: String,
}

/// Result of a collection pass
#[derive(Debug, Default)]
pub struct Collection {
    /// Files in traversal order
    pub files: Vec<CollectedFile>,
    /// Matching files that could not be read (path -> error message)
    pub skipped: Vec<(PathBuf, String)>,
}

/// Collect files under `root` whose extension appears in `rules`.
///
/// Each directory's files are visited before its subdirectories, both in
/// case-sensitive name order. Unreadable or non-UTF-8 files are reported
/// and skipped.
pub fn collect_files(root: &Path, rules: &ExtensionMap, include_hidden: bool) -> Collection {
    let mut collection = Collection::default();

    let walker = WalkDir::new(root)
        .sort_by(files_then_dirs)
        .into_iter()
        .filter_entry(|e| include_hidden || !is_hidden(e));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("Skipping unreadable path during collection: {}", e);
                continue;
            }
        };

        let path = entry.path();
        // symlinked files are read, symlinked directories are not entered
        if !path.is_file() {
            continue;
        }

        let Some(label) = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| rules.label_for(ext))
        else {
            continue;
        };

        match std::fs::read_to_string(path) {
            Ok(content) => {
                let relative = path.strip_prefix(root).unwrap_or(path);
                log::debug!("Collected {} as {}", relative.display(), label);
                collection.files.push(CollectedFile {
                    relative_path: relative.display().to_string(),
                    label: label.to_string(),
                    content,
                });
            }
            Err(e) => {
                log::warn!("Could not read file '{}'. Error: {}", path.display(), e);
                collection.skipped.push((path.to_path_buf(), e.to_string()));
            }
        }
    }

    collection
}

fn files_then_dirs(a: &DirEntry, b: &DirEntry) -> Ordering {
    let is_dir = |e: &DirEntry| e.path().is_dir();
    is_dir(a)
        .cmp(&is_dir(b))
        .then_with(|| a.file_name().cmp(b.file_name()))
}
