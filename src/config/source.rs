//! Source configuration definitions

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Schema source types that can be processed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Source {
    /// Directory tree of CustomResourceDefinition manifests
    Crd(CrdSource),

    /// Bundled Kubernetes OpenAPI document for built-in kinds
    OpenApi(OpenApiSource),
}

impl Source {
    /// Get the name of the source
    pub fn name(&self) -> &str {
        match self {
            Source::Crd(crd) => &crd.name,
            Source::OpenApi(openapi) => &openapi.name,
        }
    }

    /// Source kind label used in logs and summaries
    pub fn source_type(&self) -> &str {
        match self {
            Source::Crd(_) => "crd",
            Source::OpenApi(_) => "openapi",
        }
    }

    pub(crate) fn path_mut(&mut self) -> &mut PathBuf {
        match self {
            Source::Crd(crd) => &mut crd.path,
            Source::OpenApi(openapi) => &mut openapi.path,
        }
    }

    /// Validate the source configuration
    pub fn validate(&self) -> Result<()> {
        match self {
            Source::Crd(crd) => crd.validate(),
            Source::OpenApi(openapi) => openapi.validate(),
        }
    }
}

/// CRD directory source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrdSource {
    /// Name of the source
    pub name: String,

    /// Root directory of CRD manifests
    pub path: PathBuf,

    /// Glob filters on `group/version` (empty accepts all)
    #[serde(default)]
    pub filters: Vec<String>,
}

impl CrdSource {
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(anyhow!("CRD source name cannot be empty"));
        }

        if self.path.to_string_lossy().is_empty() {
            return Err(anyhow!("CRD source path cannot be empty"));
        }

        Ok(())
    }
}

/// OpenAPI document source configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenApiSource {
    /// Name of the source
    pub name: String,

    /// Path of the OpenAPI specification document
    pub path: PathBuf,
}

impl OpenApiSource {
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(anyhow!("OpenAPI source name cannot be empty"));
        }

        if self.path.to_string_lossy().is_empty() {
            return Err(anyhow!("OpenAPI source path cannot be empty"));
        }

        Ok(())
    }
}
