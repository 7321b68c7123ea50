//! Property classification and its projections
//!
//! Every schema node classifies into exactly one [`PropertyKind`]; the
//! three generated-code representations (Go model type, Terraform
//! schema attribute, Terraform value type) are projections of that one
//! tag, so they cannot drift apart when new shapes are added.

use serde::Serialize;

/// Classification of a schema node into the generated type system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    Bool,
    String,
    Int64,
    Float64,
    MapString,
    MapMapString,
    MapListString,
    ListString,
    ListMapString,
    ListObject,
    Object,
    /// Deliberate sentinel for shapes no rule recognizes; surfaced in
    /// output and reported as a diagnostic instead of silently coerced.
    Unknown,
}

/// Sentinel token emitted for unclassifiable nodes.
pub const UNKNOWN_TYPE: &str = "UNKNOWN";

impl PropertyKind {
    /// Go model field type in the generated source.
    pub fn go_type(&self) -> &'static str {
        match self {
            PropertyKind::Bool => "types.Bool",
            PropertyKind::String => "types.String",
            PropertyKind::Int64 => "types.Int64",
            PropertyKind::Float64 => "types.Float64",
            PropertyKind::MapString
            | PropertyKind::MapMapString
            | PropertyKind::MapListString => "types.Map",
            PropertyKind::ListString
            | PropertyKind::ListMapString
            | PropertyKind::ListObject => "types.List",
            PropertyKind::Object => "types.Object",
            PropertyKind::Unknown => UNKNOWN_TYPE,
        }
    }

    /// Terraform schema attribute expression.
    pub fn attribute_type(&self) -> &'static str {
        match self {
            PropertyKind::Bool => "schema.BoolAttribute",
            PropertyKind::String => "schema.StringAttribute",
            PropertyKind::Int64 => "schema.Int64Attribute",
            PropertyKind::Float64 => "schema.Float64Attribute",
            PropertyKind::MapString
            | PropertyKind::MapMapString
            | PropertyKind::MapListString => "schema.MapAttribute",
            PropertyKind::ListString | PropertyKind::ListMapString => "schema.ListAttribute",
            PropertyKind::ListObject => "schema.ListNestedAttribute",
            PropertyKind::Object => "schema.SingleNestedAttribute",
            PropertyKind::Unknown => UNKNOWN_TYPE,
        }
    }

    /// Terraform value-type expression, used as the element type of
    /// map/list attributes and in state conversion.
    pub fn value_type(&self) -> &'static str {
        match self {
            PropertyKind::Bool => "types.BoolType",
            PropertyKind::String => "types.StringType",
            PropertyKind::Int64 => "types.Int64Type",
            PropertyKind::Float64 => "types.Float64Type",
            PropertyKind::MapString => "types.MapType{ElemType: types.StringType}",
            PropertyKind::MapMapString => {
                "types.MapType{ElemType: types.MapType{ElemType: types.StringType}}"
            }
            PropertyKind::MapListString => {
                "types.MapType{ElemType: types.ListType{ElemType: types.StringType}}"
            }
            PropertyKind::ListString => "types.ListType{ElemType: types.StringType}",
            PropertyKind::ListMapString => {
                "types.ListType{ElemType: types.MapType{ElemType: types.StringType}}"
            }
            PropertyKind::ListObject => "types.ListType{ElemType: types.ObjectType{}}",
            PropertyKind::Object => "types.ObjectType{}",
            PropertyKind::Unknown => UNKNOWN_TYPE,
        }
    }

    /// Whether the attribute takes an `ElementType` in the generated
    /// schema (plain map/list attributes).
    pub fn has_element_type(&self) -> bool {
        matches!(
            self,
            PropertyKind::MapString
                | PropertyKind::MapMapString
                | PropertyKind::MapListString
                | PropertyKind::ListString
                | PropertyKind::ListMapString
        )
    }
}

/// One transformed schema property, isomorphic to the schema node it
/// came from.
#[derive(Debug, Clone, Serialize)]
pub struct Property {
    /// Original field name from the API schema
    pub field_name: String,

    /// Derived snake_case Terraform attribute name
    pub name: String,

    /// Go struct field name
    pub go_field: String,

    pub kind: PropertyKind,

    /// Projections of `kind`, precomputed for the templates
    pub go_type: String,
    pub attribute_type: String,
    pub value_type: String,

    /// Attribute takes an `ElementType` expression
    pub element_type: bool,

    /// Exactly one of `required`/`optional` is true; templates consume
    /// both.
    pub required: bool,
    pub optional: bool,

    /// Description sanitized for embedding in generated string literals
    pub description: String,

    /// Child properties; non-empty only for object and list-of-object
    /// nodes with declared sub-properties
    pub properties: Vec<Property>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projections_agree_per_kind() {
        // every kind projects into all three representations
        let kinds = [
            PropertyKind::Bool,
            PropertyKind::String,
            PropertyKind::Int64,
            PropertyKind::Float64,
            PropertyKind::MapString,
            PropertyKind::MapMapString,
            PropertyKind::MapListString,
            PropertyKind::ListString,
            PropertyKind::ListMapString,
            PropertyKind::ListObject,
            PropertyKind::Object,
        ];
        for kind in kinds {
            assert_ne!(kind.go_type(), UNKNOWN_TYPE);
            assert_ne!(kind.attribute_type(), UNKNOWN_TYPE);
            assert_ne!(kind.value_type(), UNKNOWN_TYPE);
        }
    }

    #[test]
    fn test_unknown_sentinel_in_all_projections() {
        assert_eq!(PropertyKind::Unknown.go_type(), UNKNOWN_TYPE);
        assert_eq!(PropertyKind::Unknown.attribute_type(), UNKNOWN_TYPE);
        assert_eq!(PropertyKind::Unknown.value_type(), UNKNOWN_TYPE);
    }

    #[test]
    fn test_element_type_kinds() {
        assert!(PropertyKind::MapString.has_element_type());
        assert!(PropertyKind::ListString.has_element_type());
        assert!(PropertyKind::ListMapString.has_element_type());
        assert!(!PropertyKind::Object.has_element_type());
        assert!(!PropertyKind::ListObject.has_element_type());
        assert!(!PropertyKind::Bool.has_element_type());
    }
}
