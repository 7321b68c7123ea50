//! Terraform Provider Generator Library
//!
//! A Rust library for generating Terraform provider sources from
//! Kubernetes schema definitions: CustomResourceDefinition manifests
//! and the bundled Kubernetes OpenAPI specification.

pub mod cli;
pub mod config;
pub mod utils;

pub use config::{Config, CrdSource, GenerationConfig, OpenApiSource, OutputConfig, Source};
pub use tfk8s_crd::{CrdParser, CrdScan, OpenApiParser, SchemaNode, SourceError};
pub use tfk8s_generator::{
    Assembler, Diagnostic, Emitter, EmitResult, Formatter, Property, PropertyKind, TemplateData,
    TemplateRegistry,
};

use anyhow::{bail, Result};
use std::time::Instant;
use tracing::{info, warn};

/// Main application context that coordinates all components
pub struct TfK8sGen {
    config: Config,
    crd_parser: CrdParser,
    openapi_parser: OpenApiParser,
    assembler: Assembler,
}

impl TfK8sGen {
    /// Create a new TfK8sGen instance with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            config,
            crd_parser: CrdParser::new(),
            openapi_parser: OpenApiParser::new(),
            assembler: Assembler::new(),
        })
    }

    /// Initialize the application (create output directories)
    pub fn initialize(&self) -> Result<()> {
        utils::ensure_directory(&self.config.output.base_path)?;
        Ok(())
    }

    /// Generate provider sources from all configured schema sources
    pub async fn generate(&self) -> Result<GenerationResult> {
        info!("Starting provider source generation");
        let start_time = Instant::now();

        let collection = self.collect_records()?;

        // Templates parse before any file is touched; a bad template
        // fails the run here.
        let registry = TemplateRegistry::new()?;
        let formatter = if self.config.output.format_sources {
            Formatter::gofmt()
        } else {
            Formatter::disabled()
        };
        let emitter = Emitter::new(registry, self.config.output.base_path.clone(), formatter);

        let emit_result = emitter.emit_all(&collection.records).await?;

        let generation_time = start_time.elapsed();
        info!("Generation completed in {:?}", generation_time);

        Ok(GenerationResult {
            kinds_generated: collection.records.len(),
            kinds_skipped: collection.kinds_skipped,
            files_generated: emit_result.files_generated(),
            warnings: collection.warnings,
            processing_time_ms: generation_time.as_millis() as u64,
        })
    }

    /// Parse all sources and report what generation would see, without
    /// writing any file
    pub fn validate_sources(&self) -> Result<ValidationReport> {
        let mut manifest_files = 0;
        for source in &self.config.sources {
            if let Source::Crd(crd_source) = source {
                manifest_files += utils::find_manifest_files(&crd_source.path)?.len();
            }
        }

        let collection = self.collect_records()?;

        Ok(ValidationReport {
            sources_checked: self.config.sources.len(),
            manifest_files,
            kinds_found: collection.records.len(),
            kinds_skipped: collection.kinds_skipped,
            warnings: collection.warnings,
        })
    }

    /// List the Terraform resource types that generation would emit
    pub fn list_kinds(&self) -> Result<Vec<String>> {
        let collection = self.collect_records()?;
        let mut kinds: Vec<String> = collection
            .records
            .iter()
            .map(|record| record.terraform_type.clone())
            .collect();
        kinds.sort();
        Ok(kinds)
    }

    /// Read every configured source and assemble template records.
    ///
    /// Source errors abort the run when `fail_fast` is set; otherwise
    /// they are logged and carried as warnings. Classification gaps
    /// never abort: they surface as warnings alongside the finished
    /// records.
    fn collect_records(&self) -> Result<RecordCollection> {
        let mut collection = RecordCollection::default();

        for source in &self.config.sources {
            match source {
                Source::Crd(crd_source) => {
                    let scan = self
                        .crd_parser
                        .parse_from_directory(&crd_source.path, &crd_source.filters);

                    if !scan.errors.is_empty() {
                        if self.config.generation.fail_fast {
                            let summary: Vec<String> =
                                scan.errors.iter().map(|e| e.to_string()).collect();
                            bail!(
                                "source {:?} reported {} errors: {}",
                                crd_source.name,
                                scan.errors.len(),
                                summary.join("; ")
                            );
                        }
                        for error in &scan.errors {
                            warn!("Source {}: {}", crd_source.name, error);
                            collection.warnings.push(error.to_string());
                        }
                    }

                    for crd in &scan.crds {
                        collection.add(self.assembler.assemble_crd(crd));
                    }
                }
                Source::OpenApi(openapi_source) => {
                    let definitions = self.openapi_parser.parse_file(&openapi_source.path)?;
                    for definition in &definitions {
                        collection.add(self.assembler.assemble_openapi(definition));
                    }
                }
            }
        }

        for record in &collection.records {
            for diagnostic in &record.diagnostics {
                warn!("{}: {}", record.terraform_type, diagnostic);
                collection
                    .warnings
                    .push(format!("{}: {}", record.terraform_type, diagnostic));
            }
        }

        Ok(collection)
    }
}

#[derive(Default)]
struct RecordCollection {
    records: Vec<TemplateData>,
    kinds_skipped: usize,
    warnings: Vec<String>,
}

impl RecordCollection {
    fn add(&mut self, record: Option<TemplateData>) {
        match record {
            Some(record) => self.records.push(record),
            None => self.kinds_skipped += 1,
        }
    }
}

/// Application error types
#[derive(thiserror::Error, Debug)]
pub enum TfK8sGenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Schema source error: {0}")]
    Source(#[from] SourceError),

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),
}

/// Result of a generation run
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub kinds_generated: usize,
    pub kinds_skipped: usize,
    pub files_generated: usize,
    pub warnings: Vec<String>,
    pub processing_time_ms: u64,
}

/// Result of validating the configured sources
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub sources_checked: usize,
    pub manifest_files: usize,
    pub kinds_found: usize,
    pub kinds_skipped: usize,
    pub warnings: Vec<String>,
}
