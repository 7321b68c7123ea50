//! Configuration module

pub mod config;
pub mod generation;
pub mod source;

pub use config::{Config, OutputConfig};
pub use generation::GenerationConfig;
pub use source::{CrdSource, OpenApiSource, Source};
