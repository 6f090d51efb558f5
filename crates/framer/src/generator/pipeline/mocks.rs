use super::{
  context::ProcessorContext,
  stage::{GeneratedOutput, OutputTarget, Stage},
};
use crate::generator::{
  codegen::{
    self, MOCKER_MODULE, Visibility,
    mocks::{MockSources, generate_mocks},
  },
  document::ApiDescription,
  errors::PipelineError,
  metrics::GenerationStats,
};

pub const STAGE_NAME: &str = "dto-mockers";

/// Generates mock factories for every DTO.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockerStage {
  visibility: Visibility,
}

impl MockerStage {
  pub fn new(visibility: Visibility) -> Self {
    Self { visibility }
  }
}

impl Stage for MockerStage {
  fn name(&self) -> &'static str {
    STAGE_NAME
  }

  fn target(&self) -> OutputTarget {
    OutputTarget::single(format!("{MOCKER_MODULE}.rs"))
  }

  fn add_context(&self, _api: &ApiDescription, context: &ProcessorContext) -> Result<ProcessorContext, PipelineError> {
    context.require_types(STAGE_NAME)?;
    context.require_type_definitions(STAGE_NAME)?;
    context.require_definition_sources(STAGE_NAME)?;
    context.require_dtos(STAGE_NAME)?;
    Ok(ProcessorContext::new())
  }

  fn generate(&self, context: &ProcessorContext) -> Result<GeneratedOutput, PipelineError> {
    let sources = MockSources::new(
      context.require_type_definitions(STAGE_NAME)?,
      context.require_definition_sources(STAGE_NAME)?,
      context.require_types(STAGE_NAME)?,
    );
    let dtos = context.require_dtos(STAGE_NAME)?;

    let tokens = generate_mocks(&sources, dtos, self.visibility)?;
    let target = self.target().file_name_for(STAGE_NAME);
    Ok(GeneratedOutput::Single(codegen::format_file(&target, tokens)?))
  }

  fn record_stats(&self, _api: &ApiDescription, context: &ProcessorContext, stats: &mut GenerationStats) {
    if let Some(dtos) = context.dtos() {
      stats.record_factories(dtos.len());
    }
  }
}
