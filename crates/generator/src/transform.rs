//! Recursive schema-tree transformation
//!
//! Walks a raw schema's property tree and produces the isomorphic
//! [`Property`] tree the templates consume. Classification applies a
//! fixed precedence of special cases; the first matching rule wins.

use crate::property::{Property, PropertyKind};
use std::collections::BTreeMap;
use std::fmt;
use tfk8s_crd::SchemaNode;
use tfk8s_naming::{sanitize_description, to_snake_case, upper_camel_case};

/// An unclassifiable property, collected during transformation so the
/// anomaly is visible in the run summary rather than buried in
/// generated source.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Dotted property path from the schema root
    pub path: String,

    /// The declared `type` tag that matched no rule
    pub declared_type: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unclassifiable property {:?} (declared type {:?})",
            self.path, self.declared_type
        )
    }
}

/// Classify a schema node into exactly one [`PropertyKind`].
///
/// Precedence, first match wins: int-or-string, preserve-unknown-fields,
/// typed additionalProperties maps, array-of-object, plain type tag,
/// unknown sentinel.
pub fn classify(node: &SchemaNode) -> PropertyKind {
    if node.int_or_string {
        return PropertyKind::String;
    }

    if node.preserves_unknown_fields() {
        return if node.has_properties() {
            PropertyKind::Object
        } else {
            PropertyKind::MapString
        };
    }

    if node.type_tag() == "object" {
        if let Some(value) = node.additional_schema() {
            match value.type_tag() {
                "string" => return PropertyKind::MapString,
                "object" => {
                    let inner_is_string_map = value
                        .additional_schema()
                        .map(|inner| inner.type_tag() == "string")
                        .unwrap_or(false);
                    if inner_is_string_map {
                        return PropertyKind::MapMapString;
                    }
                }
                "array" => {
                    let items_are_strings = value
                        .items
                        .as_deref()
                        .map(|items| items.type_tag() == "string")
                        .unwrap_or(false);
                    if items_are_strings {
                        return PropertyKind::MapListString;
                    }
                }
                _ => {}
            }
        }
    }

    if node.type_tag() == "array" {
        if let Some(items) = node.items.as_deref() {
            if items.type_tag() == "object" {
                return if items.preserves_unknown_fields() {
                    PropertyKind::ListMapString
                } else {
                    PropertyKind::ListObject
                };
            }
        }
    }

    match node.type_tag() {
        "boolean" => PropertyKind::Bool,
        "string" => PropertyKind::String,
        "integer" => PropertyKind::Int64,
        "number" => PropertyKind::Float64,
        "array" => PropertyKind::ListString,
        "object" => {
            if node.has_properties() {
                PropertyKind::Object
            } else {
                PropertyKind::MapString
            }
        }
        _ => PropertyKind::Unknown,
    }
}

/// Transform a property map into the ordered [`Property`] collection,
/// recursively. `required` is the owning node's required-name list.
pub fn transform_properties(
    properties: &BTreeMap<String, SchemaNode>,
    required: &[String],
    path: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<Property> {
    let mut transformed = Vec::with_capacity(properties.len());

    for (field_name, node) in properties {
        let property_path = if path.is_empty() {
            field_name.clone()
        } else {
            format!("{path}.{field_name}")
        };

        // Shape selection happens before classification: arrays of
        // objects recurse into the element schema, plain objects into
        // their own properties.
        let recursion = recursion_target(node);

        let kind = classify(node);
        if kind == PropertyKind::Unknown {
            diagnostics.push(Diagnostic {
                path: property_path.clone(),
                declared_type: node.type_tag().to_string(),
            });
        }

        let children = match (kind, recursion) {
            (PropertyKind::Object | PropertyKind::ListObject, Some(target)) => {
                transform_properties(target.properties, target.required, &property_path, diagnostics)
            }
            _ => Vec::new(),
        };

        let is_required = required.iter().any(|name| name == field_name);

        transformed.push(Property {
            field_name: field_name.clone(),
            name: to_snake_case(field_name),
            go_field: upper_camel_case(field_name),
            kind,
            go_type: kind.go_type().to_string(),
            attribute_type: kind.attribute_type().to_string(),
            value_type: kind.value_type().to_string(),
            element_type: kind.has_element_type(),
            required: is_required,
            optional: !is_required,
            description: sanitize_description(node.description.as_deref().unwrap_or_default()),
            properties: children,
        });
    }

    transformed
}

struct Recursion<'a> {
    properties: &'a BTreeMap<String, SchemaNode>,
    required: &'a [String],
}

/// Pick the schema subtree to recurse into, if any. For an array of
/// plain objects the target is the element schema; nodes whose items
/// preserve unknown fields are terminal.
fn recursion_target(node: &SchemaNode) -> Option<Recursion<'_>> {
    if node.type_tag() == "array" {
        let items = node.items.as_deref()?;
        if items.type_tag() == "object" && items.has_properties() && !items.preserves_unknown_fields()
        {
            return Some(Recursion {
                properties: &items.properties,
                required: &items.required,
            });
        }
        return None;
    }

    if node.has_properties() {
        return Some(Recursion {
            properties: &node.properties,
            required: &node.required,
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(yaml: &str) -> SchemaNode {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn single(yaml: &str) -> Property {
        let parent = node(yaml);
        let mut diagnostics = Vec::new();
        let mut properties =
            transform_properties(&parent.properties, &parent.required, "", &mut diagnostics);
        assert_eq!(properties.len(), 1);
        properties.remove(0)
    }

    #[test]
    fn test_int_or_string_classifies_as_string() {
        let schema = node(
            r#"
            type: integer
            x-kubernetes-int-or-string: true
            "#,
        );
        assert_eq!(classify(&schema), PropertyKind::String);
        assert_eq!(PropertyKind::String.go_type(), "types.String");
        assert_eq!(PropertyKind::String.attribute_type(), "schema.StringAttribute");
        assert_eq!(PropertyKind::String.value_type(), "types.StringType");
    }

    #[test]
    fn test_preserve_unknown_fields_without_properties() {
        let schema = node(
            r#"
            type: object
            x-kubernetes-preserve-unknown-fields: true
            "#,
        );
        assert_eq!(classify(&schema), PropertyKind::MapString);
    }

    #[test]
    fn test_preserve_unknown_fields_with_properties() {
        let property = single(
            r#"
            type: object
            properties:
              config:
                type: object
                x-kubernetes-preserve-unknown-fields: true
                properties:
                  mode:
                    type: string
            "#,
        );
        assert_eq!(property.kind, PropertyKind::Object);
        assert_eq!(property.properties.len(), 1);
        assert_eq!(property.properties[0].name, "mode");
    }

    #[test]
    fn test_map_of_string() {
        let schema = node(
            r#"
            type: object
            additionalProperties:
              type: string
            "#,
        );
        assert_eq!(classify(&schema), PropertyKind::MapString);
    }

    #[test]
    fn test_map_of_map_of_string() {
        let schema = node(
            r#"
            type: object
            additionalProperties:
              type: object
              additionalProperties:
                type: string
            "#,
        );
        assert_eq!(classify(&schema), PropertyKind::MapMapString);
    }

    #[test]
    fn test_map_of_string_lists() {
        let schema = node(
            r#"
            type: object
            additionalProperties:
              type: array
              items:
                type: string
            "#,
        );
        assert_eq!(classify(&schema), PropertyKind::MapListString);
        assert_eq!(PropertyKind::MapListString.go_type(), "types.Map");
        assert_eq!(PropertyKind::MapListString.attribute_type(), "schema.MapAttribute");
        assert_eq!(
            PropertyKind::MapListString.value_type(),
            "types.MapType{ElemType: types.ListType{ElemType: types.StringType}}"
        );
    }

    #[test]
    fn test_array_of_objects_recurses_into_items() {
        let property = single(
            r#"
            type: object
            properties:
              containers:
                type: array
                items:
                  type: object
                  required: ["name"]
                  properties:
                    name:
                      type: string
                    image:
                      type: string
            "#,
        );
        assert_eq!(property.kind, PropertyKind::ListObject);
        assert_eq!(property.properties.len(), 2);
        // children are ordered lexicographically and carry the item
        // schema's required list
        assert_eq!(property.properties[0].name, "image");
        assert!(property.properties[0].optional);
        assert_eq!(property.properties[1].name, "name");
        assert!(property.properties[1].required);
    }

    #[test]
    fn test_array_of_unknown_fields_items() {
        let property = single(
            r#"
            type: object
            properties:
              patches:
                type: array
                items:
                  type: object
                  x-kubernetes-preserve-unknown-fields: true
            "#,
        );
        assert_eq!(property.kind, PropertyKind::ListMapString);
        assert!(property.properties.is_empty());
    }

    #[test]
    fn test_plain_type_fallbacks() {
        assert_eq!(classify(&node("type: boolean")), PropertyKind::Bool);
        assert_eq!(classify(&node("type: string")), PropertyKind::String);
        assert_eq!(classify(&node("type: integer")), PropertyKind::Int64);
        assert_eq!(classify(&node("type: number")), PropertyKind::Float64);
        assert_eq!(
            classify(&node("type: array\nitems:\n  type: string")),
            PropertyKind::ListString
        );
        assert_eq!(classify(&node("type: object")), PropertyKind::MapString);
    }

    #[test]
    fn test_unrecognized_type_surfaces_as_unknown() {
        let parent = node(
            r#"
            type: object
            properties:
              mystery:
                type: quux
            "#,
        );
        let mut diagnostics = Vec::new();
        let properties =
            transform_properties(&parent.properties, &parent.required, "", &mut diagnostics);

        assert_eq!(properties[0].kind, PropertyKind::Unknown);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].path, "mystery");
        assert_eq!(diagnostics[0].declared_type, "quux");
    }

    #[test]
    fn test_diagnostic_paths_are_dotted() {
        let parent = node(
            r#"
            type: object
            properties:
              outer:
                type: object
                properties:
                  inner:
                    type: quux
            "#,
        );
        let mut diagnostics = Vec::new();
        transform_properties(&parent.properties, &parent.required, "", &mut diagnostics);
        assert_eq!(diagnostics[0].path, "outer.inner");
    }

    #[test]
    fn test_required_optional_exclusive() {
        let parent = node(
            r#"
            type: object
            required: ["size"]
            properties:
              size:
                type: integer
              color:
                type: string
            "#,
        );
        let mut diagnostics = Vec::new();
        let properties =
            transform_properties(&parent.properties, &parent.required, "", &mut diagnostics);

        for property in &properties {
            assert!(property.required ^ property.optional);
        }
        let size = properties.iter().find(|p| p.name == "size").unwrap();
        assert!(size.required && !size.optional);
    }

    #[test]
    fn test_deterministic_output() {
        let yaml = r#"
            type: object
            required: ["name"]
            properties:
              name:
                type: string
              spec:
                type: object
                properties:
                  replicas:
                    type: integer
                  selector:
                    type: object
                    additionalProperties:
                      type: string
        "#;
        let parent = node(yaml);

        let mut first_diags = Vec::new();
        let first =
            transform_properties(&parent.properties, &parent.required, "", &mut first_diags);
        let mut second_diags = Vec::new();
        let second =
            transform_properties(&parent.properties, &parent.required, "", &mut second_diags);

        assert_eq!(format!("{first:?}"), format!("{second:?}"));
    }

    #[test]
    fn test_name_derivation_on_properties() {
        let property = single(
            r#"
            type: object
            properties:
              maxUnavailable:
                type: string
                x-kubernetes-int-or-string: true
            "#,
        );
        assert_eq!(property.field_name, "maxUnavailable");
        assert_eq!(property.name, "max_unavailable");
        assert_eq!(property.go_field, "MaxUnavailable");
        assert_eq!(property.kind, PropertyKind::String);
    }

    #[test]
    fn test_description_sanitized() {
        let property = single(
            r#"
            type: object
            properties:
              note:
                type: string
                description: "uses `ticks` and \"quotes\"\nover lines"
            "#,
        );
        assert_eq!(property.description, "uses 'ticks' and 'quotes'over lines");
    }
}
