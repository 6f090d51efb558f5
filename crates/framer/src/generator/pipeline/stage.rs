use indexmap::IndexMap;

use super::context::ProcessorContext;
use crate::generator::{document::ApiDescription, errors::PipelineError, metrics::GenerationStats};

pub const NAME_PLACEHOLDER: &str = "[name]";

/// Where a stage's output is written, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
  SingleFile(String),
  /// File name template containing [`NAME_PLACEHOLDER`].
  MultipleFiles { template: String },
}

impl OutputTarget {
  pub fn single(file_name: impl Into<String>) -> Self {
    Self::SingleFile(file_name.into())
  }

  pub fn multiple(template: impl Into<String>) -> Self {
    Self::MultipleFiles {
      template: template.into(),
    }
  }

  /// Expands the template for one entry of a multi-file output. A single file
  /// target ignores `name`.
  pub fn file_name_for(&self, name: &str) -> String {
    match self {
      Self::SingleFile(file_name) => file_name.clone(),
      Self::MultipleFiles { template } => template.replace(NAME_PLACEHOLDER, name),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedOutput {
  Single(String),
  /// Entry name to contents, expanded through [`OutputTarget::file_name_for`].
  Multiple(IndexMap<String, String>),
}

/// One step of the generator pipeline.
///
/// `add_context` sees everything earlier stages produced and returns only the
/// slots this stage adds. `generate` then runs against the merged context.
pub trait Stage {
  fn name(&self) -> &'static str;

  fn target(&self) -> OutputTarget;

  fn add_context(&self, api: &ApiDescription, context: &ProcessorContext) -> Result<ProcessorContext, PipelineError>;

  fn generate(&self, context: &ProcessorContext) -> Result<GeneratedOutput, PipelineError>;

  fn record_stats(&self, _api: &ApiDescription, _context: &ProcessorContext, _stats: &mut GenerationStats) {}
}
