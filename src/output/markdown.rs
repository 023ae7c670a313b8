// Markdown document assembly

use crate::collect::CollectedFile;
use crate::error::{Error, Result};
use std::path::Path;

/// Render the full document: title, directory tree, then each collected
/// file in its own labelled code fence
pub fn render_markdown(project_name: &str, tree: &[String], files: &[CollectedFile]) -> String {
    let mut md = String::new();

    md.push_str(&format!("# Project: {}\n\n", project_name));

    md.push_str("## Directory Structure\n\n");
    md.push_str("```\n");
    for line in tree {
        md.push_str(line);
        md.push('\n');
    }
    md.push_str("```\n\n");
    md.push_str("---\n\n");

    md.push_str("## Specific Content\n\n");
    for (idx, file) in files.iter().enumerate() {
        md.push_str(&format!("### {}. `{}`\n\n", idx + 1, file.relative_path));
        md.push_str(&format!("```{}\n", file.label));
        md.push_str(&file.content);
        md.push('\n');
        md.push_str("```\n\n");
    }

    md
}

/// Render and write the document, replacing any existing file
pub fn write_markdown(
    output_path: &Path,
    project_name: &str,
    tree: &[String],
    files: &[CollectedFile],
) -> Result<()> {
    let md = render_markdown(project_name, tree, files);
    std::fs::write(output_path, md).map_err(|e| Error::file_write(output_path, e))?;
    log::info!("Wrote {}", output_path.display());
    Ok(())
}
