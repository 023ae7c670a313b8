//! Extension rules: which files get collected and how their code fences
//! are labelled.
//!
//! The rules file is a single line of comma-separated tokens:
//!
//! ```text
//! *.py(python),*.rs(rust),*.md(markdown)
//! ```
//!
//! Tokens that don't match `*.<ext>(<label>)` are reported and skipped;
//! they never abort the load.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;

/// Anchored at the start only, trailing text after `)` is tolerated.
static RULE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\*\.(\w+)\((\w+)\)").expect("Invalid rule token regex")
});

/// Mapping from file extension (no leading dot) to code fence label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionMap {
    labels: HashMap<String, String>,
}

impl ExtensionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load rules from a file. A missing file is fatal.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::RulesNotFound(path.to_path_buf())
            } else {
                Error::file_read(path, e)
            }
        })?;
        let map = Self::parse(&contents);
        log::debug!("Loaded {} extension rules from {}", map.len(), path.display());
        Ok(map)
    }

    /// Parse rules text. Later duplicates overwrite earlier ones.
    pub fn parse(text: &str) -> Self {
        let mut map = Self::new();
        for token in text.trim().split(',') {
            match parse_token(token) {
                Some((ext, label)) => {
                    log::trace!("Rule: .{} -> {}", ext, label);
                    map.insert(ext, label);
                }
                None => log::warn!("Unable to parse pattern '{}'. Skipping.", token),
            }
        }
        map
    }

    pub fn insert(&mut self, extension: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(extension.into(), label.into());
    }

    /// Label for an extension; matching is case-sensitive
    pub fn label_for(&self, extension: &str) -> Option<&str> {
        self.labels.get(extension).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

fn parse_token(token: &str) -> Option<(&str, &str)> {
    let caps = RULE_TOKEN.captures(token.trim())?;
    let ext = caps.get(1)?.as_str();
    let label = caps.get(2)?.as_str();
    Some((ext, label))
}
