//! Identifier derivation for generated Terraform provider sources
//!
//! Pure string transforms shared by the schema reader, the tree
//! transformer, and the template data assembler. All functions are
//! deterministic: identical inputs always derive identical names.

use once_cell::sync::Lazy;
use regex::Regex;

// Two-pass camel boundary split: the first pass separates `(x)(Xy)`
// patterns so acronym runs stay intact, the second separates the
// trailing `(x0-9)(X)` boundaries the first pass cannot see.
static FIRST_CAP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("first-cap boundary pattern"));
static ALL_CAP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("all-cap boundary pattern"));

/// Convert an API identifier to snake_case.
///
/// Camel-case boundaries become underscores, with consecutive capitals
/// treated as a single acronym boundary. The separators `-`, `.` and `/`
/// that appear in group names and API versions also become underscores.
pub fn to_snake_case(input: &str) -> String {
    let pass1 = FIRST_CAP.replace_all(input, "${1}_${2}");
    let pass2 = ALL_CAP.replace_all(&pass1, "${1}_${2}");
    pass2
        .replace(['-', '.', '/'], "_")
        .to_lowercase()
}

/// Capitalize the first character of an identifier.
///
/// Returns `None` for empty input; callers building names from API
/// fields must guard against empty segments.
pub fn upper_case_first_letter(input: &str) -> Option<String> {
    let mut chars = input.chars();
    let first = chars.next()?;
    let mut out = String::with_capacity(input.len());
    out.extend(first.to_uppercase());
    out.push_str(chars.as_str());
    Some(out)
}

/// Derive a Go-compatible identifier: first letter capitalized and the
/// separators `-`, `.` and `/` replaced with underscores.
pub fn go_name(input: &str) -> String {
    upper_case_first_letter(input)
        .unwrap_or_default()
        .replace(['-', '.', '/'], "_")
}

/// Strip characters that are unsafe inside generated string literals.
///
/// Backticks and double quotes become single quotes; newlines and
/// backslashes are removed. The result embeds safely in a literal
/// delimited by either quote style, and a second pass is a no-op.
pub fn sanitize_description(input: &str) -> String {
    input
        .chars()
        .filter_map(|c| match c {
            '`' | '"' => Some('\''),
            '\n' | '\r' | '\\' => None,
            other => Some(other),
        })
        .collect()
}

/// Upper-camel form of an API identifier, e.g. `maxUnavailable` →
/// `MaxUnavailable`, `host-alias` → `HostAlias`. Used for generated Go
/// struct field names.
pub fn upper_camel_case(input: &str) -> String {
    pascal(&to_snake_case(input))
}

/// Upper-camel form of a snake_cased identifier.
fn pascal(snake: &str) -> String {
    snake
        .split('_')
        .filter(|segment| !segment.is_empty())
        .filter_map(upper_case_first_letter)
        .collect()
}

/// File name of the generated resource source, e.g.
/// `resource_apps_deployment_v1.go`. Core kinds have no API group and
/// drop the group segment.
pub fn source_file_name(group: &str, kind: &str, version: &str) -> String {
    format!("resource_{}.go", resource_name(group, kind, version))
}

/// Terraform resource type name exposed to practitioners, e.g.
/// `k8s_apps_deployment_v1`.
pub fn terraform_resource_type(group: &str, kind: &str, version: &str) -> String {
    format!("k8s_{}", resource_name(group, kind, version))
}

/// Go model type name for the generated resource implementation, e.g.
/// `AppsDeploymentV1Resource`.
pub fn model_type_name(group: &str, kind: &str, version: &str) -> String {
    format!("{}Resource", pascal(&resource_name(group, kind, version)))
}

/// Canonical resource name without the provider prefix, e.g.
/// `apps_deployment_v1`. Used for documentation, example and workflow
/// paths.
pub fn resource_name(group: &str, kind: &str, version: &str) -> String {
    if group.is_empty() {
        format!("{}_{}", to_snake_case(kind), to_snake_case(version))
    } else {
        format!(
            "{}_{}_{}",
            to_snake_case(group),
            to_snake_case(kind),
            to_snake_case(version)
        )
    }
}
