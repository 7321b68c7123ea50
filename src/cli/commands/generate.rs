//! Generate command implementation

use crate::cli::utils;
use anyhow::Result;
use clap::{ArgMatches, Command};
use std::path::PathBuf;
use tracing::info;

pub fn command() -> Command {
    Command::new("generate")
        .about("Generate provider sources from configured schema sources")
        .arg(
            clap::Arg::new("config")
                .short('c')
                .long("config")
                .help("Configuration file path")
                .value_name("FILE"),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .help("Output directory")
                .value_name("DIR"),
        )
        .arg(
            clap::Arg::new("fail-fast")
                .long("fail-fast")
                .help("Abort on the first source error")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("no-format")
                .long("no-format")
                .help("Skip the formatting pass over generated sources")
                .action(clap::ArgAction::SetTrue),
        )
}

pub async fn run(matches: &ArgMatches) -> Result<()> {
    info!("Starting provider source generation");

    let mut config = utils::load_config(matches)?;

    if let Some(output_path) = matches.get_one::<String>("output") {
        config.output.base_path = PathBuf::from(output_path);
    }

    if matches.get_flag("fail-fast") {
        config.generation.fail_fast = true;
    }

    if matches.get_flag("no-format") {
        config.output.format_sources = false;
    }

    let app = utils::create_app(config)?;
    app.initialize()?;

    let result = app.generate().await?;

    println!("Generation completed successfully!");
    println!("Resource kinds generated: {}", result.kinds_generated);
    println!("Resource kinds skipped: {}", result.kinds_skipped);
    println!("Files generated: {}", result.files_generated);
    println!("Processing time: {}ms", result.processing_time_ms);

    if !result.warnings.is_empty() {
        println!("Warnings: {}", result.warnings.len());
        for warning in &result.warnings {
            eprintln!("  Warning: {warning}");
        }
    }

    Ok(())
}
