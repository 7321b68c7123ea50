//! Template data assembly
//!
//! Joins per-kind identity metadata with the transformed property tree
//! into one record per resource kind, dropping kinds that expose no
//! user-configurable fields.

use crate::property::Property;
use crate::transform::{transform_properties, Diagnostic};
use serde::Serialize;
use std::collections::BTreeMap;
use tfk8s_crd::{CrdDocument, OpenApiDefinition, SchemaNode};
use tfk8s_naming as naming;
use tracing::debug;

/// Top-level schema fields that never become attributes: they are
/// server bookkeeping, not user configuration.
pub const EXCLUDED_ROOT_FIELDS: [&str; 4] = ["metadata", "status", "apiVersion", "kind"];

/// Identity of one resource kind/version.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceIdentity {
    pub group: String,
    pub version: String,
    pub kind: String,
    pub namespaced: bool,
    pub description: String,
}

/// Everything the templates need to emit one resource kind.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateData {
    pub group: String,
    pub version: String,
    pub kind: String,
    pub namespaced: bool,

    /// Sanitized top-level description
    pub description: String,

    /// Generated Go source file name
    pub file_name: String,

    /// Terraform resource type exposed to practitioners
    pub terraform_type: String,

    /// Go model type name
    pub model_type: String,

    /// Canonical resource name used for docs/example/workflow paths
    pub resource_name: String,

    /// Root property collection, bookkeeping fields removed
    pub properties: Vec<Property>,

    /// Unclassifiable-property reports collected during transformation
    #[serde(skip)]
    pub diagnostics: Vec<Diagnostic>,
}

pub struct Assembler;

impl Default for Assembler {
    fn default() -> Self {
        Self::new()
    }
}

impl Assembler {
    pub fn new() -> Self {
        Self
    }

    /// Assemble a record from a CRD, using the first declared version.
    /// Returns `None` when the version has no schema or no
    /// user-configurable properties remain after stripping.
    pub fn assemble_crd(&self, crd: &CrdDocument) -> Option<TemplateData> {
        let version = crd.primary_version()?;
        let root = version.root_schema()?;

        let identity = ResourceIdentity {
            group: crd.spec.group.clone(),
            version: version.name.clone(),
            kind: crd.resource_kind().to_string(),
            namespaced: crd.namespaced(),
            description: naming::sanitize_description(
                root.description.as_deref().unwrap_or_default(),
            ),
        };

        self.assemble(identity, root)
    }

    /// Assemble a record from a built-in definition extracted out of
    /// the OpenAPI document. Built-in kinds are treated as namespaced;
    /// the document does not carry scope.
    pub fn assemble_openapi(&self, definition: &OpenApiDefinition) -> Option<TemplateData> {
        let identity = ResourceIdentity {
            group: definition.group.clone(),
            version: definition.version.clone(),
            kind: definition.kind.clone(),
            namespaced: true,
            description: naming::sanitize_description(&definition.description),
        };

        self.assemble(identity, &definition.schema)
    }

    fn assemble(&self, identity: ResourceIdentity, root: &SchemaNode) -> Option<TemplateData> {
        let user_properties: BTreeMap<String, SchemaNode> = root
            .properties
            .iter()
            .filter(|(name, _)| !EXCLUDED_ROOT_FIELDS.contains(&name.as_str()))
            .map(|(name, node)| (name.clone(), node.clone()))
            .collect();

        if user_properties.is_empty() {
            debug!(
                "Skipping {}/{} {}: no user-configurable properties",
                identity.group, identity.version, identity.kind
            );
            return None;
        }

        let mut diagnostics = Vec::new();
        let properties =
            transform_properties(&user_properties, &root.required, "", &mut diagnostics);

        let (group, kind, version) = (&identity.group, &identity.kind, &identity.version);
        Some(TemplateData {
            file_name: naming::source_file_name(group, kind, version),
            terraform_type: naming::terraform_resource_type(group, kind, version),
            model_type: naming::model_type_name(group, kind, version),
            resource_name: naming::resource_name(group, kind, version),
            group: identity.group,
            version: identity.version,
            kind: identity.kind,
            namespaced: identity.namespaced,
            description: identity.description,
            properties,
            diagnostics,
        })
    }
}
