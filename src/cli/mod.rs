//! CLI module for proj2md

mod args;

pub use args::Args;

use crate::config::Config;
use crate::error::Result;
use crate::generate::generate;
use std::process::ExitCode;

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = Args::parse_args();
    setup_logging(args.quiet, args.verbose);
    log::debug!("CLI args parsed: {:?}", args);

    match execute(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: Args) -> Result<()> {
    let verbose = args.verbose > 0;
    let config = Config::discover(args.proj_path, args.include_hidden)?;

    if verbose {
        println!("Project: {}", config.project_root.display());
        println!("Rules: {}", config.rules_path.display());
        println!("Include hidden: {}", config.include_hidden);
    }

    let report = generate(&config)?;

    if verbose {
        println!("{}", report.summary());
    }
    println!(
        "Markdown documentation has been generated at '{}'.",
        report.output_path.display()
    );

    Ok(())
}

fn setup_logging(quiet: bool, verbose: u8) {
    let level = if quiet {
        log::LevelFilter::Error
    } else {
        match verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
