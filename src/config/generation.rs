//! Generation settings

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Whether source read/decode errors abort the run
    pub fail_fast: bool,
}

impl GenerationConfig {
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self { fail_fast: false }
    }
}
