//! Raw schema and CRD document types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// One node of a Kubernetes structural schema (the OpenAPI v3 dialect
/// used by CRDs and the built-in API specification).
///
/// Properties decode into a `BTreeMap` so iteration order is
/// lexicographic; generated output stays stable across runs and
/// platforms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaNode {
    /// Declared type tag (`object`, `array`, `string`, `integer`,
    /// `number`, `boolean`)
    #[serde(rename = "type")]
    pub schema_type: Option<String>,

    /// Free-text field description
    pub description: Option<String>,

    /// Nested properties for object nodes
    pub properties: BTreeMap<String, SchemaNode>,

    /// Element schema for array nodes
    pub items: Option<Box<SchemaNode>>,

    /// Value schema for map-shaped objects
    #[serde(rename = "additionalProperties")]
    pub additional_properties: Option<AdditionalProperties>,

    /// Names of required properties
    pub required: Vec<String>,

    /// Accepts either an integer or a string on the wire
    #[serde(rename = "x-kubernetes-int-or-string")]
    pub int_or_string: bool,

    /// Object keeps fields not declared in `properties`
    #[serde(rename = "x-kubernetes-preserve-unknown-fields")]
    pub preserve_unknown_fields: Option<bool>,
}

impl SchemaNode {
    /// Declared type tag, defaulting to empty when absent.
    pub fn type_tag(&self) -> &str {
        self.schema_type.as_deref().unwrap_or("")
    }

    /// Value schema of `additionalProperties`, when it is a schema
    /// rather than the boolean permission form.
    pub fn additional_schema(&self) -> Option<&SchemaNode> {
        match &self.additional_properties {
            Some(AdditionalProperties::Schema(node)) => Some(node),
            _ => None,
        }
    }

    /// Whether the node declares nested sub-properties.
    pub fn has_properties(&self) -> bool {
        !self.properties.is_empty()
    }

    /// Whether `x-kubernetes-preserve-unknown-fields` is set to true.
    pub fn preserves_unknown_fields(&self) -> bool {
        self.preserve_unknown_fields == Some(true)
    }
}

/// `additionalProperties` is either a nested value schema or the bare
/// boolean permission form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Schema(Box<SchemaNode>),
    Allowed(bool),
}

/// A decoded CustomResourceDefinition manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrdDocument {
    #[serde(rename = "apiVersion")]
    pub api_version: String,

    pub kind: String,

    pub metadata: CrdMetadata,

    pub spec: CrdSpec,

    /// Manifest file the document was decoded from
    #[serde(skip)]
    pub source_path: PathBuf,
}

impl CrdDocument {
    /// Resource kind from `spec.names.kind`.
    pub fn resource_kind(&self) -> &str {
        &self.spec.names.kind
    }

    /// Whether instances live in a namespace.
    pub fn namespaced(&self) -> bool {
        self.spec.scope == "Namespaced"
    }

    /// The first declared version. Multi-version CRDs collapse to the
    /// first entry; the remaining versions are decoded but not emitted.
    pub fn primary_version(&self) -> Option<&CrdVersion> {
        self.spec.versions.first()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrdMetadata {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrdSpec {
    pub group: String,

    pub names: CrdNames,

    #[serde(default = "default_scope")]
    pub scope: String,

    #[serde(default)]
    pub versions: Vec<CrdVersion>,
}

fn default_scope() -> String {
    "Namespaced".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrdNames {
    pub kind: String,

    #[serde(default)]
    pub plural: String,

    #[serde(default)]
    pub singular: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrdVersion {
    pub name: String,

    #[serde(default)]
    pub served: bool,

    #[serde(default)]
    pub storage: bool,

    pub schema: Option<CrdVersionSchema>,
}

impl CrdVersion {
    /// The version's root schema, when one is declared.
    pub fn root_schema(&self) -> Option<&SchemaNode> {
        self.schema.as_ref()?.open_api_v3_schema.as_ref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrdVersionSchema {
    #[serde(rename = "openAPIV3Schema")]
    pub open_api_v3_schema: Option<SchemaNode>,
}

/// Errors produced while reading schema sources. The walk collects
/// these without halting sibling traversal; the caller decides whether
/// they abort the run.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unexpected kind {kind:?} in {path} (expected CustomResourceDefinition)")]
    UnexpectedKind { path: PathBuf, kind: String },
}

impl SourceError {
    /// Path of the offending file.
    pub fn path(&self) -> &std::path::Path {
        match self {
            SourceError::Read { path, .. } => path,
            SourceError::Decode { path, .. } => path,
            SourceError::UnexpectedKind { path, .. } => path,
        }
    }
}

/// Result of walking a CRD source tree: every document that decoded,
/// plus every error encountered along the way.
#[derive(Debug, Default)]
pub struct CrdScan {
    pub crds: Vec<CrdDocument>,
    pub errors: Vec<SourceError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_node_defaults() {
        let node: SchemaNode = serde_yaml::from_str("type: string").unwrap();
        assert_eq!(node.type_tag(), "string");
        assert!(!node.has_properties());
        assert!(!node.int_or_string);
        assert!(!node.preserves_unknown_fields());
    }

    #[test]
    fn test_additional_properties_forms() {
        let schema_form: SchemaNode = serde_yaml::from_str(
            r#"
            type: object
            additionalProperties:
              type: string
            "#,
        )
        .unwrap();
        assert_eq!(schema_form.additional_schema().unwrap().type_tag(), "string");

        let bool_form: SchemaNode = serde_yaml::from_str(
            r#"
            type: object
            additionalProperties: true
            "#,
        )
        .unwrap();
        assert!(bool_form.additional_schema().is_none());
    }

    #[test]
    fn test_extension_flags() {
        let node: SchemaNode = serde_yaml::from_str(
            r#"
            type: integer
            x-kubernetes-int-or-string: true
            "#,
        )
        .unwrap();
        assert!(node.int_or_string);

        let node: SchemaNode = serde_yaml::from_str(
            r#"
            type: object
            x-kubernetes-preserve-unknown-fields: true
            "#,
        )
        .unwrap();
        assert!(node.preserves_unknown_fields());
    }

    #[test]
    fn test_properties_iterate_sorted() {
        let node: SchemaNode = serde_yaml::from_str(
            r#"
            type: object
            properties:
              zeta:
                type: string
              alpha:
                type: string
              mid:
                type: string
            "#,
        )
        .unwrap();

        let names: Vec<&String> = node.properties.keys().collect();
        assert_eq!(names, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_crd_scope_default() {
        let spec: CrdSpec = serde_yaml::from_str(
            r#"
            group: example.com
            names:
              kind: Widget
            versions: []
            "#,
        )
        .unwrap();
        assert_eq!(spec.scope, "Namespaced");
    }
}
