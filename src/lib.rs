//! proj2md - Render a project as a single Markdown document
//!
//! Walks a project directory, draws its structure as a text tree and
//! concatenates every file whose extension has a rule into labelled code
//! fences.

pub mod cli;
pub mod collect;
pub mod config;
pub mod error;
pub mod generate;
pub mod output;
pub mod rules;
pub mod tree;

// Re-export main types
pub use collect::{collect_files, CollectedFile, Collection};
pub use config::{Config, OUTPUT_FILE_NAME, RULES_FILE_NAME};
pub use error::{Error, Result};
pub use generate::{generate, GenerationReport};
pub use output::{render_markdown, write_markdown};
pub use rules::ExtensionMap;
pub use tree::{render_tree, TreeEntry};
