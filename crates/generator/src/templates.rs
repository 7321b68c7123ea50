//! Named template registry
//!
//! Templates are parsed once into an explicit registry value at setup
//! and handed to the emitter; a template that fails to parse fails
//! construction instead of surfacing later mid-run.

use anyhow::{Context, Result};
use minijinja::Environment;
use serde::Serialize;

/// Terraform resource source file
pub const RESOURCE_TEMPLATE: &str = "resource.go";

/// Provider registration table
pub const PROVIDER_TEMPLATE: &str = "provider.go";

/// Documentation page
pub const DOC_TEMPLATE: &str = "doc.md";

/// Example configuration
pub const EXAMPLE_TEMPLATE: &str = "example.tf";

/// Acceptance test exercising the generated schema
pub const TEST_TEMPLATE: &str = "test.go";

/// Per-kind CI verification workflow
pub const WORKFLOW_TEMPLATE: &str = "workflow.yaml";

pub struct TemplateRegistry {
    env: Environment<'static>,
}

impl TemplateRegistry {
    /// Parse all embedded templates. Any parse failure is an error
    /// here, before generation starts.
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();

        let sources: [(&str, &str); 6] = [
            (RESOURCE_TEMPLATE, include_str!("../templates/resource.go.j2")),
            (PROVIDER_TEMPLATE, include_str!("../templates/provider.go.j2")),
            (DOC_TEMPLATE, include_str!("../templates/doc.md.j2")),
            (EXAMPLE_TEMPLATE, include_str!("../templates/example.tf.j2")),
            (TEST_TEMPLATE, include_str!("../templates/test.go.j2")),
            (WORKFLOW_TEMPLATE, include_str!("../templates/workflow.yaml.j2")),
        ];

        for (name, source) in sources {
            env.add_template(name, source)
                .with_context(|| format!("failed to parse template {name:?}"))?;
        }

        Ok(Self { env })
    }

    /// Render a named template against the given data.
    pub fn render<S: Serialize>(&self, name: &str, data: &S) -> Result<String> {
        let template = self
            .env
            .get_template(name)
            .with_context(|| format!("unknown template {name:?}"))?;
        template
            .render(data)
            .with_context(|| format!("failed to render template {name:?}"))
    }
}
