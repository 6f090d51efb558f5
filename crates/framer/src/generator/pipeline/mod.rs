//! The generator pipeline: an ordered list of stages sharing one
//! [`ProcessorContext`].
//!
//! ```text
//! types ──► dtos ──► dto-mockers
//! ```
//!
//! Each stage adds its slots to the context and then renders its file(s). The
//! driver prepends the file header and writes a module index listing every
//! generated Rust file.

use indexmap::IndexMap;

use super::{
  codegen::Visibility,
  document::ApiDescription,
  errors::PipelineError,
  metrics::GenerationStats,
};

pub mod context;
pub mod dtos;
pub mod mocks;
pub mod stage;
pub mod types;

pub use context::{ContextKey, ProcessorContext};
pub use dtos::DtoStage;
pub use mocks::MockerStage;
pub use stage::{GeneratedOutput, Stage};
pub use types::TypesStage;

#[cfg(test)]
pub(crate) mod tests;

pub const MODULE_INDEX: &str = "mod.rs";

#[derive(Debug, Clone, Copy, Default)]
pub struct GenerationOptions {
  pub visibility: Visibility,
  /// Resolve every named schema, not only those reachable from operation bodies.
  pub all_schemas: bool,
}

pub struct Pipeline {
  stages: Vec<Box<dyn Stage>>,
  source: Option<String>,
}

#[derive(Debug)]
pub struct PipelineOutput {
  /// The final context, after every stage contributed.
  pub context: ProcessorContext,
  /// File name to contents, in stage order, module index last.
  pub generated: IndexMap<String, String>,
  pub stats: GenerationStats,
}

impl PipelineOutput {
  pub fn files(&self) -> impl Iterator<Item = (&str, &str)> {
    self
      .generated
      .iter()
      .map(|(name, contents)| (name.as_str(), contents.as_str()))
  }
}

impl Pipeline {
  pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
    Self { stages, source: None }
  }

  /// `types`, `dtos`, `dto-mockers`.
  pub fn standard(options: GenerationOptions) -> Self {
    Self::new(vec![
      Box::new(TypesStage::new(options.visibility, options.all_schemas)),
      Box::new(DtoStage::new(options.visibility)),
      Box::new(MockerStage::new(options.visibility)),
    ])
  }

  /// Names the input document in the generated file headers.
  #[must_use]
  pub fn with_source(mut self, source: impl Into<String>) -> Self {
    self.source = Some(source.into());
    self
  }

  pub fn stage_names(&self) -> Vec<&'static str> {
    self.stages.iter().map(|stage| stage.name()).collect()
  }

  pub fn run(&self, api: &ApiDescription, context: ProcessorContext) -> Result<PipelineOutput, PipelineError> {
    let header = file_header(api, self.source.as_deref());
    let mut context = context;
    let mut generated = IndexMap::new();
    let mut stats = GenerationStats::default();

    for stage in &self.stages {
      let addition = stage.add_context(api, &context)?;
      context = context.extend(addition)?;

      match stage.generate(&context)? {
        GeneratedOutput::Single(contents) => {
          let file_name = stage.target().file_name_for(stage.name());
          generated.insert(file_name, format!("{header}\n{contents}"));
        }
        GeneratedOutput::Multiple(entries) => {
          let target = stage.target();
          for (name, contents) in entries {
            generated.insert(target.file_name_for(&name), format!("{header}\n{contents}"));
          }
        }
      }

      stage.record_stats(api, &context, &mut stats);
    }

    if let Some(index) = module_index(&generated) {
      generated.insert(MODULE_INDEX.to_string(), format!("{header}\n{index}"));
    }

    stats.record_files(generated.len());

    Ok(PipelineOutput {
      context,
      generated,
      stats,
    })
  }
}

/// The `//!` header placed at the top of every generated file.
pub fn file_header(api: &ApiDescription, source: Option<&str>) -> String {
  let description = api
    .info
    .description
    .as_deref()
    .map(str::trim)
    .filter(|description| !description.is_empty())
    .map_or_else(
      || String::from("No description provided"),
      |description| description.replace('\n', "\n//! "),
    );

  let mut header = format!(
    "//! AUTO-GENERATED CODE - DO NOT EDIT!\n//!\n//! {}\n",
    api.info.title
  );
  if let Some(source) = source {
    header.push_str(&format!("//! Source: {source}\n"));
  }
  header.push_str(&format!(
    "//! Version: {}\n//! Generated by `framer`\n//!\n//! {description}\n",
    api.info.version
  ));
  header
}

/// `pub mod` declarations for every generated `.rs` file, or `None` when there
/// is nothing to index.
fn module_index(generated: &IndexMap<String, String>) -> Option<String> {
  let modules: Vec<_> = generated
    .keys()
    .filter_map(|file_name| file_name.strip_suffix(".rs"))
    .filter(|stem| !stem.contains('/') && *stem != "mod")
    .map(|stem| format!("pub mod {stem};\n"))
    .collect();

  (!modules.is_empty()).then(|| modules.concat())
}
