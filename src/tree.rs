//! ASCII directory tree rendering.
//!
//! ```text
//! demo/
//! ├── src/
//! │   ├── lib.rs
//! │   └── main.rs
//! └── Cargo.toml
//! ```
//!
//! Each directory lists its subdirectories before its files, both ordered
//! by case-insensitive name.

use crate::config::dir_name;
use std::cmp::Ordering;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const BLANK: &str = "    ";

/// One visited entry below the root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub name: String,
    /// 1 for direct children of the root
    pub depth: usize,
    pub is_dir: bool,
}

impl TreeEntry {
    pub fn new(name: impl Into<String>, depth: usize, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            depth,
            is_dir,
        }
    }
}

/// Render the tree under `root` as display lines, starting with `<root>/`
pub fn render_tree(root: &Path, include_hidden: bool) -> Vec<String> {
    let entries = walk_tree(root, include_hidden);
    format_tree(&dir_name(root), &entries)
}

/// Depth-first, pre-order listing of everything under `root`.
///
/// Unreadable directories are reported and rendered without children.
pub fn walk_tree(root: &Path, include_hidden: bool) -> Vec<TreeEntry> {
    let mut entries = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .min_depth(1)
        .sort_by(tree_order)
        .into_iter()
        .filter_entry(|e| include_hidden || !is_hidden(e));

    for entry in walker {
        match entry {
            Ok(entry) => {
                log::trace!("Tree entry: {}", entry.path().display());
                entries.push(TreeEntry::new(
                    entry.file_name().to_string_lossy(),
                    entry.depth(),
                    entry.file_type().is_dir(),
                ));
            }
            Err(e) => {
                if let Some(path) = dangling_link(&e) {
                    let name = path.file_name().map(|n| n.to_string_lossy().into_owned());
                    match name {
                        Some(name) if include_hidden || !name.starts_with('.') => {
                            log::trace!("Dangling link: {}", path.display());
                            entries.push(TreeEntry::new(name, e.depth(), false));
                        }
                        _ => {}
                    }
                    continue;
                }
                let path = e
                    .path()
                    .map_or_else(|| root.display().to_string(), |p| p.display().to_string());
                log::warn!("Cannot access directory '{}'. Skipping. ({})", path, e);
            }
        }
    }

    entries
}

/// Lay out pre-ordered entries with connector glyphs
pub fn format_tree(root_name: &str, entries: &[TreeEntry]) -> Vec<String> {
    let last = last_sibling_flags(entries);
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(format!("{}/", root_name));

    // indent contributed by each open ancestor directory
    let mut indent: Vec<&str> = Vec::new();

    for (entry, &is_last) in entries.iter().zip(&last) {
        indent.truncate(entry.depth.saturating_sub(1));
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        let prefix = indent.concat();

        if entry.is_dir {
            lines.push(format!("{}{}{}/", prefix, connector, entry.name));
            indent.push(if is_last { BLANK } else { PIPE });
        } else {
            lines.push(format!("{}{}{}", prefix, connector, entry.name));
        }
    }

    lines
}

/// For each entry, whether no later sibling follows it
fn last_sibling_flags(entries: &[TreeEntry]) -> Vec<bool> {
    let mut flags = vec![false; entries.len()];
    // seen[d]: a later entry at depth d shares the current parent
    let mut seen: Vec<bool> = Vec::new();

    for (i, entry) in entries.iter().enumerate().rev() {
        let depth = entry.depth;
        if seen.len() <= depth {
            seen.resize(depth + 1, false);
        }
        flags[i] = !seen[depth];
        seen[depth] = true;
        seen.truncate(depth + 1);
    }

    flags
}

/// A symlink whose target is missing; walkdir reports these as errors
/// when following links, but they are still listed as plain entries.
fn dangling_link(err: &walkdir::Error) -> Option<&Path> {
    let path = err.path()?;
    let missing = err
        .io_error()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound);
    let is_link = path
        .symlink_metadata()
        .is_ok_and(|meta| meta.file_type().is_symlink());
    (missing && is_link).then_some(path)
}

/// Directories first, then case-insensitive name; raw name breaks ties.
///
/// Entries are sorted before links are followed, so the target's type is
/// read through the path.
fn tree_order(a: &DirEntry, b: &DirEntry) -> Ordering {
    let key = |e: &DirEntry| {
        let name = e.file_name().to_string_lossy().to_lowercase();
        (e.path().is_file(), name)
    };
    key(a)
        .cmp(&key(b))
        .then_with(|| a.file_name().cmp(b.file_name()))
}

pub(crate) fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sample_project() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("src/utils")).unwrap();
        fs::create_dir_all(root.join("docs")).unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::write(root.join("src/main.py"), "print(1)").unwrap();
        fs::write(root.join("src/utils/helpers.py"), "").unwrap();
        fs::write(root.join("docs/guide.md"), "# Guide").unwrap();
        fs::write(root.join("README.md"), "# Demo").unwrap();
        fs::write(root.join("app.py"), "").unwrap();
        fs::write(root.join(".env"), "KEY=1").unwrap();
        fs::write(root.join(".git/HEAD"), "ref").unwrap();
        dir
    }

    #[test]
    fn test_format_tree_connectors() {
        let entries = vec![
            TreeEntry::new("src", 1, true),
            TreeEntry::new("lib.rs", 2, false),
            TreeEntry::new("main.rs", 2, false),
            TreeEntry::new("Cargo.toml", 1, false),
        ];
        let lines = format_tree("demo", &entries);
        assert_eq!(
            lines,
            vec![
                "demo/",
                "├── src/",
                "│   ├── lib.rs",
                "│   └── main.rs",
                "└── Cargo.toml",
            ]
        );
    }

    #[test]
    fn test_format_tree_last_directory_uses_blank_indent() {
        let entries = vec![
            TreeEntry::new("a.txt", 1, false),
            TreeEntry::new("z", 1, true),
            TreeEntry::new("inner", 2, true),
            TreeEntry::new("deep.txt", 3, false),
        ];
        let lines = format_tree("root", &entries);
        assert_eq!(
            lines,
            vec![
                "root/",
                "├── a.txt",
                "└── z/",
                "    └── inner/",
                "        └── deep.txt",
            ]
        );
    }

    #[test]
    fn test_format_tree_sibling_after_nested_directory() {
        let entries = vec![
            TreeEntry::new("a", 1, true),
            TreeEntry::new("b", 2, true),
            TreeEntry::new("c.txt", 3, false),
            TreeEntry::new("d.txt", 2, false),
            TreeEntry::new("e.txt", 1, false),
        ];
        let lines = format_tree("r", &entries);
        assert_eq!(
            lines,
            vec![
                "r/",
                "├── a/",
                "│   ├── b/",
                "│   │   └── c.txt",
                "│   └── d.txt",
                "└── e.txt",
            ]
        );
    }

    #[test]
    fn test_format_empty_tree() {
        assert_eq!(format_tree("empty", &[]), vec!["empty/"]);
    }

    #[test]
    fn test_render_tree_orders_directories_first() {
        let dir = sample_project();
        let name = dir_name(dir.path());
        let lines = render_tree(dir.path(), false);
        assert_eq!(
            lines,
            vec![
                format!("{}/", name),
                "├── docs/".to_string(),
                "│   └── guide.md".to_string(),
                "├── src/".to_string(),
                "│   ├── utils/".to_string(),
                "│   │   └── helpers.py".to_string(),
                "│   └── main.py".to_string(),
                "├── app.py".to_string(),
                "└── README.md".to_string(),
            ]
        );
    }

    #[test]
    fn test_render_tree_sorts_case_insensitively() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        fs::write(dir.path().join("A.txt"), "").unwrap();
        fs::write(dir.path().join("c.txt"), "").unwrap();

        let lines = render_tree(dir.path(), false);
        assert_eq!(&lines[1..], ["├── A.txt", "├── b.txt", "└── c.txt"]);
    }

    #[test]
    fn test_render_tree_includes_hidden_when_requested() {
        let dir = sample_project();
        let hidden = render_tree(dir.path(), true);
        let visible = render_tree(dir.path(), false);

        assert!(hidden.len() > visible.len());
        assert!(hidden.iter().any(|l| l.ends_with(".git/")));
        assert!(hidden.iter().any(|l| l.ends_with("HEAD")));
        assert!(hidden.iter().any(|l| l.ends_with(".env")));
        assert!(!visible.iter().any(|l| l.contains(".git") || l.contains(".env")));
    }

    #[test]
    fn test_hidden_entries_do_not_affect_last_connector() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("visible.txt"), "").unwrap();
        fs::write(dir.path().join(".zz_hidden"), "").unwrap();

        let lines = render_tree(dir.path(), false);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "└── visible.txt");
    }

    #[cfg(unix)]
    #[test]
    fn test_file_symlink_sorts_with_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("zdir")).unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        std::os::unix::fs::symlink(dir.path().join("b.txt"), dir.path().join("a_link.txt"))
            .unwrap();

        let lines = render_tree(dir.path(), false);
        assert_eq!(&lines[1..], ["├── zdir/", "├── a_link.txt", "└── b.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_listed() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "").unwrap();
        std::os::unix::fs::symlink(dir.path().join("missing"), dir.path().join("dangling"))
            .unwrap();
        std::os::unix::fs::symlink(dir.path().join("missing"), dir.path().join(".hidden_link"))
            .unwrap();

        let lines = render_tree(dir.path(), false);
        assert_eq!(&lines[1..], ["├── dangling", "└── b.txt"]);

        let with_hidden = render_tree(dir.path(), true);
        assert_eq!(with_hidden.len(), 4);
        assert_eq!(walk_tree(dir.path(), true).len(), 3);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_has_no_children() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("inner.txt"), "").unwrap();
        fs::write(dir.path().join("z.txt"), "").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // privileged users can still list it
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let lines = render_tree(dir.path(), false);
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert_eq!(&lines[1..], ["├── locked/", "└── z.txt"]);
    }

    #[test]
    fn test_line_count_matches_walk() {
        let dir = sample_project();
        for include_hidden in [false, true] {
            let entries = walk_tree(dir.path(), include_hidden);
            let lines = render_tree(dir.path(), include_hidden);
            assert_eq!(lines.len(), entries.len() + 1);
        }
    }

    #[test]
    fn test_indent_width_matches_depth() {
        let dir = sample_project();
        let entries = walk_tree(dir.path(), true);
        let lines = render_tree(dir.path(), true);
        for (entry, line) in entries.iter().zip(&lines[1..]) {
            let indent = line.chars().take_while(|c| *c == ' ' || *c == '│').count();
            assert_eq!(indent, (entry.depth - 1) * 4, "bad indent for {:?}", line);
        }
    }
}
