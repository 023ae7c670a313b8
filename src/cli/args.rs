//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Traverse a project directory and generate a Markdown document of its
/// structure and source files
#[derive(Parser, Debug)]
#[command(name = "proj2md")]
#[command(about = "Traverse a project directory and generate a Markdown documentation")]
#[command(version)]
pub struct Args {
    /// Path to the project root directory
    #[arg(long = "proj-path", visible_alias = "proj_path", value_name = "PATH")]
    pub proj_path: PathBuf,

    /// Include hidden files and directories. Ignored by default
    #[arg(long = "include-hidden", visible_alias = "include_hidden")]
    pub include_hidden: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}
