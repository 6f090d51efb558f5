use indexmap::IndexMap;

use super::{
  context::ProcessorContext,
  stage::{GeneratedOutput, OutputTarget, Stage},
};
use crate::generator::{
  codegen::{self, DTO_MODULE, Visibility, dto_ident},
  document::ApiDescription,
  errors::PipelineError,
  metrics::GenerationStats,
};

pub const STAGE_NAME: &str = "dtos";

/// Wraps every generated struct in a transparent DTO.
#[derive(Debug, Clone, Copy, Default)]
pub struct DtoStage {
  visibility: Visibility,
}

impl DtoStage {
  pub fn new(visibility: Visibility) -> Self {
    Self { visibility }
  }
}

impl Stage for DtoStage {
  fn name(&self) -> &'static str {
    STAGE_NAME
  }

  fn target(&self) -> OutputTarget {
    OutputTarget::single(format!("{DTO_MODULE}.rs"))
  }

  fn add_context(&self, _api: &ApiDescription, context: &ProcessorContext) -> Result<ProcessorContext, PipelineError> {
    let definitions = context.require_type_definitions(STAGE_NAME)?;
    let dtos: IndexMap<String, String> = definitions
      .structs()
      .map(|definition| (definition.name.clone(), dto_ident(&definition.name).to_string()))
      .collect();
    Ok(ProcessorContext::new().with_dtos(dtos))
  }

  fn generate(&self, context: &ProcessorContext) -> Result<GeneratedOutput, PipelineError> {
    let definitions = context.require_type_definitions(STAGE_NAME)?;
    let dtos = context.require_dtos(STAGE_NAME)?;

    let structs = dtos.keys().filter_map(|name| definitions.get(name));
    let tokens = codegen::dtos::generate_dtos(structs, self.visibility);
    let target = self.target().file_name_for(STAGE_NAME);
    Ok(GeneratedOutput::Single(codegen::format_file(&target, tokens)?))
  }

  fn record_stats(&self, _api: &ApiDescription, context: &ProcessorContext, stats: &mut GenerationStats) {
    if let Some(dtos) = context.dtos() {
      stats.record_dtos(dtos.len());
    }
  }
}
