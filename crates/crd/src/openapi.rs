//! Built-in resource extraction from the bundled Kubernetes OpenAPI
//! document

use crate::types::SchemaNode;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// A named type definition lifted out of the OpenAPI document,
/// addressable as a synthetic schema document for one built-in resource
/// kind.
#[derive(Debug, Clone)]
pub struct OpenApiDefinition {
    /// Definition name, e.g. `io.k8s.api.apps.v1.Deployment`
    pub name: String,

    /// API group (empty for core kinds)
    pub group: String,

    pub version: String,

    pub kind: String,

    pub description: String,

    /// The definition body as a raw schema node
    pub schema: SchemaNode,
}

/// The `x-kubernetes-group-version-kind` extension entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupVersionKind {
    #[serde(default)]
    pub group: String,

    pub version: String,

    pub kind: String,
}

#[derive(Debug, Default, Deserialize)]
struct OpenApiDocument {
    #[serde(default)]
    definitions: BTreeMap<String, DefinitionNode>,
}

#[derive(Debug, Deserialize)]
struct DefinitionNode {
    #[serde(rename = "x-kubernetes-group-version-kind", default)]
    group_version_kind: Vec<GroupVersionKind>,

    #[serde(flatten)]
    schema: SchemaNode,
}

pub struct OpenApiParser;

impl Default for OpenApiParser {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenApiParser {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse an OpenAPI document from disk.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<OpenApiDefinition>> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("failed to read {}: {e}", path.display()))?;
        self.parse_document(&content)
            .map_err(|e| anyhow!("failed to decode {}: {e}", path.display()))
    }

    /// Parse the document text and extract every definition carrying a
    /// group-version-kind extension. List wrapper kinds are skipped;
    /// they mirror their element kind and expose no configuration of
    /// their own.
    pub fn parse_document(&self, content: &str) -> Result<Vec<OpenApiDefinition>> {
        let document = self.decode(content)?;

        let mut definitions = Vec::new();

        for (name, node) in document.definitions {
            let Some(gvk) = node.group_version_kind.first() else {
                continue;
            };
            if gvk.kind.ends_with("List") {
                continue;
            }

            definitions.push(OpenApiDefinition {
                name,
                group: gvk.group.clone(),
                version: gvk.version.clone(),
                kind: gvk.kind.clone(),
                description: node.schema.description.clone().unwrap_or_default(),
                schema: node.schema,
            });
        }

        info!(
            "Extracted {} resource definitions from OpenAPI document",
            definitions.len()
        );
        Ok(definitions)
    }

    /// The bundled document is JSON; accept YAML as well since both
    /// circulate.
    fn decode(&self, content: &str) -> Result<OpenApiDocument> {
        match serde_json::from_str(content) {
            Ok(document) => Ok(document),
            Err(json_error) => serde_yaml::from_str(content).map_err(|yaml_error| {
                anyhow!(
                    "failed to parse OpenAPI document. JSON error: {json_error}, YAML error: {yaml_error}"
                )
            }),
        }
    }
}
