//! Schema source reading for Terraform provider generation
//!
//! Decodes Kubernetes CustomResourceDefinition manifests from a
//! directory tree and extracts built-in resource definitions from the
//! bundled Kubernetes OpenAPI document. Both operations hand raw schema
//! nodes to the generator untouched.

pub mod openapi;
pub mod parser;
pub mod types;

pub use openapi::{GroupVersionKind, OpenApiDefinition, OpenApiParser};
pub use parser::CrdParser;
pub use types::{
    AdditionalProperties, CrdDocument, CrdNames, CrdScan, CrdSpec, CrdVersion, SchemaNode,
    SourceError,
};
