//! Validate command implementation

use crate::cli::utils;
use anyhow::Result;
use clap::{ArgMatches, Command};

pub fn command() -> Command {
    Command::new("validate")
        .about("Parse all configured sources and report what generation would see")
        .arg(
            clap::Arg::new("config")
                .short('c')
                .long("config")
                .help("Configuration file path")
                .value_name("FILE"),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    let config = utils::load_config(matches)?;
    let app = utils::create_app(config)?;

    let report = app.validate_sources()?;

    println!("Validation completed!");
    println!("Sources checked: {}", report.sources_checked);
    println!("Manifest files found: {}", report.manifest_files);
    println!("Resource kinds found: {}", report.kinds_found);
    println!("Resource kinds skipped: {}", report.kinds_skipped);

    if !report.warnings.is_empty() {
        println!("Warnings: {}", report.warnings.len());
        for warning in &report.warnings {
            eprintln!("  Warning: {warning}");
        }
    }

    Ok(())
}
