//! Main configuration structure and implementation

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{GenerationConfig, Source};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// List of schema sources to process
    pub sources: Vec<Source>,

    /// Output configuration
    pub output: OutputConfig,

    /// Generation settings
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("failed to read config {}: {e}", path.display()))?;
        let mut config: Config = serde_yaml::from_str(&content)
            .map_err(|e| anyhow!("failed to parse config {}: {e}", path.display()))?;
        config.expand_paths()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.version != "1.0" {
            return Err(anyhow!(
                "Unsupported configuration version: {}",
                self.version
            ));
        }

        if self.sources.is_empty() {
            return Err(anyhow!("At least one source must be configured"));
        }

        for source in &self.sources {
            source.validate()?;
        }

        self.output.validate()?;

        Ok(())
    }

    /// Expand `~` and environment variables in configured paths
    fn expand_paths(&mut self) -> Result<()> {
        for source in &mut self.sources {
            let path = source.path_mut();
            *path = expand_path(path)?;
        }
        self.output.base_path = expand_path(&self.output.base_path)?;
        Ok(())
    }
}

/// Expand `~` and `$VAR` references in a path
pub fn expand_path(path: &Path) -> Result<PathBuf> {
    let raw = path.to_string_lossy();
    let expanded = shellexpand::full(&raw)
        .map_err(|e| anyhow!("failed to expand path {raw}: {e}"))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Base path for the generated provider tree
    pub base_path: PathBuf,

    /// Run the Go formatter over generated sources
    #[serde(default = "default_format_sources")]
    pub format_sources: bool,
}

fn default_format_sources() -> bool {
    true
}

impl OutputConfig {
    pub fn validate(&self) -> Result<()> {
        if self.base_path.to_string_lossy().is_empty() {
            return Err(anyhow!("Base path cannot be empty"));
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("./generated"),
            format_sources: true,
        }
    }
}
