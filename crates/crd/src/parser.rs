//! CRD manifest parsing

use crate::types::{CrdDocument, CrdScan, SourceError};
use glob::Pattern;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

const CRD_KIND: &str = "CustomResourceDefinition";

pub struct CrdParser;

impl Default for CrdParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CrdParser {
    pub fn new() -> Self {
        Self
    }

    /// Walk a directory tree and decode every manifest file, applying
    /// group/version filters.
    ///
    /// The walk never halts on a bad file: decode failures and
    /// unexpected kinds are collected into the returned scan so the
    /// caller can decide whether they abort the run.
    pub fn parse_from_directory(&self, dir_path: &Path, filters: &[String]) -> CrdScan {
        info!("Parsing CRDs from directory: {:?}", dir_path);

        let mut scan = CrdScan::default();

        for entry in WalkDir::new(dir_path)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let path = entry.path();

            let is_manifest = path
                .extension()
                .map(|ext| ext == "yaml" || ext == "yml" || ext == "json")
                .unwrap_or(false);
            if !is_manifest {
                continue;
            }

            match self.parse_crd_file(path) {
                Ok(mut crds) => {
                    crds.retain(|crd| self.matches_filters(crd, filters));
                    scan.crds.extend(crds);
                }
                Err(error) => {
                    debug!("Failed to parse {}: {}", path.display(), error);
                    scan.errors.push(error);
                }
            }
        }

        info!(
            "Found {} CRDs after filtering ({} source errors)",
            scan.crds.len(),
            scan.errors.len()
        );
        scan
    }

    /// Decode a single manifest file, which may hold several YAML
    /// documents.
    fn parse_crd_file(&self, path: &Path) -> Result<Vec<CrdDocument>, SourceError> {
        let content = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut crds = Vec::new();

        for document in serde_yaml::Deserializer::from_str(&content) {
            let value =
                serde_yaml::Value::deserialize(document).map_err(|source| SourceError::Decode {
                    path: path.to_path_buf(),
                    source,
                })?;

            if value.is_null() {
                continue;
            }

            let kind = value.get("kind").and_then(|k| k.as_str()).unwrap_or("");
            if kind != CRD_KIND {
                return Err(SourceError::UnexpectedKind {
                    path: path.to_path_buf(),
                    kind: kind.to_string(),
                });
            }

            let mut crd: CrdDocument =
                serde_yaml::from_value(value).map_err(|source| SourceError::Decode {
                    path: path.to_path_buf(),
                    source,
                })?;
            crd.source_path = path.to_path_buf();
            crds.push(crd);
        }

        Ok(crds)
    }

    /// Check a CRD against the configured filters.
    fn matches_filters(&self, crd: &CrdDocument, filters: &[String]) -> bool {
        if filters.is_empty() {
            return true;
        }

        filters.iter().any(|filter| self.matches_filter(crd, filter))
    }

    /// Match one glob pattern against `group/version` of each declared
    /// version.
    fn matches_filter(&self, crd: &CrdDocument, filter: &str) -> bool {
        let pattern = match Pattern::new(filter) {
            Ok(p) => p,
            Err(_) => return false,
        };

        crd.spec.versions.iter().any(|version| {
            let api_version = format!("{}/{}", crd.spec.group, version.name);
            pattern.matches(&api_version)
        })
    }
}
