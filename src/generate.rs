// Document generation pipeline

use crate::collect::collect_files;
use crate::config::Config;
use crate::error::Result;
use crate::output::write_markdown;
use crate::rules::ExtensionMap;
use crate::tree::render_tree;
use std::path::PathBuf;

/// Report of what was generated
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub output_path: PathBuf,
    pub tree_lines: usize,
    pub files_collected: usize,
    /// Matching files that could not be read (path -> error message)
    pub skipped: Vec<(PathBuf, String)>,
}

impl GenerationReport {
    pub fn summary(&self) -> String {
        format!(
            "Tree lines: {}, files collected: {}, files skipped: {}",
            self.tree_lines,
            self.files_collected,
            self.skipped.len()
        )
    }
}

/// Validate the project root, load the rules, walk the project and write
/// the Markdown document into the project root.
///
/// Nothing is written unless the root is a directory and the rules file exists.
pub fn generate(config: &Config) -> Result<GenerationReport> {
    config.validate()?;
    let rules = ExtensionMap::load(&config.rules_path)?;

    log::info!("Rendering tree for {}", config.project_root.display());
    let tree = render_tree(&config.project_root, config.include_hidden);

    log::info!("Collecting files matching {} extensions", rules.len());
    let collection = collect_files(&config.project_root, &rules, config.include_hidden);

    let output_path = config.output_path();
    write_markdown(&output_path, &config.project_name(), &tree, &collection.files)?;

    Ok(GenerationReport {
        output_path,
        tree_lines: tree.len(),
        files_collected: collection.files.len(),
        skipped: collection.skipped,
    })
}
