//! Multi-target file emission
//!
//! Drives the named templates for each assembled record and writes the
//! results to deterministic paths under the output root. Any render,
//! write, or format failure aborts the whole run; a half-written
//! generated tree is recreated by the next invocation.

use crate::assemble::TemplateData;
use crate::format::Formatter;
use crate::result::EmitResult;
use crate::templates::{
    TemplateRegistry, DOC_TEMPLATE, EXAMPLE_TEMPLATE, PROVIDER_TEMPLATE, RESOURCE_TEMPLATE,
    TEST_TEMPLATE, WORKFLOW_TEMPLATE,
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

pub struct Emitter {
    registry: TemplateRegistry,
    base_path: PathBuf,
    formatter: Formatter,
}

impl Emitter {
    pub fn new(registry: TemplateRegistry, base_path: PathBuf, formatter: Formatter) -> Self {
        Self {
            registry,
            base_path,
            formatter,
        }
    }

    /// Emit every record plus the provider registration table.
    ///
    /// Records are processed in file-name order so repeated runs write
    /// the same files in the same sequence.
    pub async fn emit_all(&self, records: &[TemplateData]) -> Result<EmitResult> {
        info!("Emitting {} resource kinds", records.len());

        let mut ordered: Vec<&TemplateData> = records.iter().collect();
        ordered.sort_by(|a, b| a.file_name.cmp(&b.file_name));

        let mut result = EmitResult::default();

        for record in &ordered {
            self.emit_record(record, &mut result).await?;
        }

        self.emit_provider(&ordered, &mut result).await?;

        info!("Emitted {} files", result.files_generated());
        Ok(result)
    }

    /// Emit the full target set for one resource kind.
    async fn emit_record(&self, record: &TemplateData, result: &mut EmitResult) -> Result<()> {
        let provider_dir = self.base_path.join("internal").join("provider");

        let source_path = provider_dir.join(&record.file_name);
        self.write_rendered(RESOURCE_TEMPLATE, record, &source_path, result)?;
        self.formatter
            .format_file(&source_path)
            .with_context(|| format!("formatting {}", source_path.display()))?;

        let test_name = record.file_name.replace(".go", "_test.go");
        let test_path = provider_dir.join(test_name);
        self.write_rendered(TEST_TEMPLATE, record, &test_path, result)?;
        self.formatter
            .format_file(&test_path)
            .with_context(|| format!("formatting {}", test_path.display()))?;

        let doc_path = self
            .base_path
            .join("docs")
            .join("resources")
            .join(format!("{}.md", record.resource_name));
        self.write_rendered(DOC_TEMPLATE, record, &doc_path, result)?;

        let example_path = self
            .base_path
            .join("examples")
            .join("resources")
            .join(&record.terraform_type)
            .join("resource.tf");
        self.write_rendered(EXAMPLE_TEMPLATE, record, &example_path, result)?;

        let workflow_path = self
            .base_path
            .join(".github")
            .join("workflows")
            .join(format!("verify-{}.yaml", record.resource_name));
        self.write_rendered(WORKFLOW_TEMPLATE, record, &workflow_path, result)?;

        Ok(())
    }

    /// Emit the registration table listing every generated resource.
    async fn emit_provider(
        &self,
        records: &[&TemplateData],
        result: &mut EmitResult,
    ) -> Result<()> {
        let data = serde_json::json!({ "records": records });
        let path = self
            .base_path
            .join("internal")
            .join("provider")
            .join("provider_resources.go");
        self.write_rendered(PROVIDER_TEMPLATE, &data, &path, result)?;
        self.formatter
            .format_file(&path)
            .with_context(|| format!("formatting {}", path.display()))?;
        Ok(())
    }

    /// Render one template and write it, creating parent directories
    /// idempotently.
    fn write_rendered<S: serde::Serialize>(
        &self,
        template: &str,
        data: &S,
        path: &Path,
        result: &mut EmitResult,
    ) -> Result<()> {
        let content = self.registry.render(template, data)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;

        result.files.push(path.to_path_buf());
        Ok(())
    }
}
