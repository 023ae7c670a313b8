use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Name of the extension rules file that ships next to the executable
pub const RULES_FILE_NAME: &str = "searching_files.txt";

/// Name of the generated document, written inside the project root
pub const OUTPUT_FILE_NAME: &str = "project_document.md";

/// Run configuration, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory to document
    pub project_root: PathBuf,
    /// Whether dot-prefixed entries are traversed and collected
    pub include_hidden: bool,
    /// Location of the extension rules file
    pub rules_path: PathBuf,
}

impl Config {
    /// Build a config with an explicit rules file location
    pub fn new(
        project_root: impl Into<PathBuf>,
        include_hidden: bool,
        rules_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            include_hidden,
            rules_path: rules_path.into(),
        }
    }

    /// Build a config whose rules file is the companion file installed
    /// alongside the running executable
    pub fn discover(project_root: impl Into<PathBuf>, include_hidden: bool) -> Result<Self> {
        let rules_path = install_dir()?.join(RULES_FILE_NAME);
        log::debug!("Resolved rules file: {}", rules_path.display());
        Ok(Self::new(project_root, include_hidden, rules_path))
    }

    /// Check that the project root exists and is a directory
    pub fn validate(&self) -> Result<()> {
        if !self.project_root.is_dir() {
            return Err(Error::InvalidProjectPath(self.project_root.clone()));
        }
        Ok(())
    }

    /// Where the generated document is written
    pub fn output_path(&self) -> PathBuf {
        self.project_root.join(OUTPUT_FILE_NAME)
    }

    /// The project root's own directory name.
    ///
    /// Paths like `.` or `..` have no final component, so those fall back
    /// to the canonical path's name.
    pub fn project_name(&self) -> String {
        dir_name(&self.project_root)
    }
}

/// Directory containing the running executable
pub fn install_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            Error::other(format!(
                "Executable has no parent directory: {}",
                exe.display()
            ))
        })
}

pub(crate) fn dir_name(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        return name.to_string_lossy().into_owned();
    }
    path.canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| path.display().to_string())
}
