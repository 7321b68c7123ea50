//! CLI command implementations

use anyhow::Result;
use clap::{ArgMatches, Command};

pub mod commands;

/// Main CLI application
pub struct CliApp;

impl CliApp {
    /// Create the CLI application
    pub fn app() -> Command {
        Command::new("tfk8s-gen")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Generate Terraform provider sources from Kubernetes schema definitions")
            .subcommand_negates_reqs(true)
            .subcommand(commands::generate::command())
            .subcommand(commands::validate::command())
            .subcommand(commands::info::command())
    }

    /// Run the CLI application
    pub async fn run(matches: &ArgMatches) -> Result<()> {
        match matches.subcommand() {
            Some(("generate", sub_matches)) => commands::generate::run(sub_matches).await,
            Some(("validate", sub_matches)) => commands::validate::run(sub_matches).await,
            Some(("info", sub_matches)) => commands::info::run(sub_matches).await,
            _ => {
                // No subcommand provided, show help
                let _ = Self::app().print_help();
                Ok(())
            }
        }
    }
}

/// Common CLI utilities
pub mod utils {
    use anyhow::{anyhow, Result};
    use std::path::PathBuf;

    /// Get configuration file path from arguments or use default
    pub fn get_config_path(matches: &clap::ArgMatches) -> Result<PathBuf> {
        if let Some(config_path) = matches.get_one::<String>("config") {
            Ok(PathBuf::from(config_path))
        } else {
            let default_paths = [
                PathBuf::from(".tfk8s-gen.yaml"),
                PathBuf::from(".tfk8s-gen.yml"),
                PathBuf::from("tfk8s-gen.yaml"),
                PathBuf::from("tfk8s-gen.yml"),
            ];

            for path in &default_paths {
                if path.exists() {
                    return Ok(path.clone());
                }
            }

            Err(anyhow!(
                "No configuration file found. Use --config to specify a file"
            ))
        }
    }

    /// Load configuration from file
    pub fn load_config(matches: &clap::ArgMatches) -> Result<crate::Config> {
        let config_path = get_config_path(matches)?;
        crate::Config::from_file(&config_path)
    }

    /// Create TfK8sGen instance
    pub fn create_app(config: crate::Config) -> Result<crate::TfK8sGen> {
        crate::TfK8sGen::new(config)
    }
}
