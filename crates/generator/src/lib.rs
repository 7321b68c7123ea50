//! Terraform provider source generation from transformed schemas

pub mod assemble;
pub mod emit;
pub mod format;
pub mod property;
pub mod result;
pub mod templates;
pub mod transform;

pub use assemble::{Assembler, ResourceIdentity, TemplateData, EXCLUDED_ROOT_FIELDS};
pub use emit::Emitter;
pub use format::Formatter;
pub use property::{Property, PropertyKind};
pub use result::EmitResult;
pub use templates::TemplateRegistry;
pub use transform::{classify, transform_properties, Diagnostic};
