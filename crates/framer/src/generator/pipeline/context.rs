use indexmap::IndexMap;
use strum::Display;

use crate::generator::{
  converter::{LookupTable, TypeDefinitions},
  document::SchemaNode,
  errors::PipelineError,
};

/// Names of the context slots, as reported in pipeline errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ContextKey {
  Types,
  Signatures,
  Responses,
  TypeDefinitions,
  DefinitionSources,
  Dtos,
}

/// Shared state threaded through the pipeline.
///
/// Every slot is written by exactly one stage. Later stages read the slots
/// earlier ones produced and contribute new slots of their own.
#[derive(Debug, Clone, Default)]
pub struct ProcessorContext {
  /// Raw named schemas in declaration order.
  types: Option<IndexMap<String, SchemaNode>>,
  signatures: Option<LookupTable>,
  /// Decorated request/response body schemas keyed by type name.
  responses: Option<IndexMap<String, SchemaNode>>,
  type_definitions: Option<TypeDefinitions>,
  /// Decorated source node of every struct definition.
  definition_sources: Option<IndexMap<String, SchemaNode>>,
  /// Struct name to DTO name.
  dtos: Option<IndexMap<String, String>>,
}

fn merge_slot<T>(key: ContextKey, current: Option<T>, added: Option<T>) -> Result<Option<T>, PipelineError> {
  match (current, added) {
    (Some(_), Some(_)) => Err(PipelineError::ContextKeyRedefined { key }),
    (current, None) => Ok(current),
    (None, added) => Ok(added),
  }
}

fn require<'a, T>(slot: Option<&'a T>, stage: &str, key: ContextKey) -> Result<&'a T, PipelineError> {
  slot.ok_or_else(|| PipelineError::MissingContext {
    stage: stage.to_string(),
    key,
  })
}

impl ProcessorContext {
  pub fn new() -> Self {
    Self::default()
  }

  /// Merges the slots of `addition` into this context. Providing a slot that is
  /// already present is rejected.
  pub fn extend(self, addition: ProcessorContext) -> Result<Self, PipelineError> {
    Ok(Self {
      types: merge_slot(ContextKey::Types, self.types, addition.types)?,
      signatures: merge_slot(ContextKey::Signatures, self.signatures, addition.signatures)?,
      responses: merge_slot(ContextKey::Responses, self.responses, addition.responses)?,
      type_definitions: merge_slot(
        ContextKey::TypeDefinitions,
        self.type_definitions,
        addition.type_definitions,
      )?,
      definition_sources: merge_slot(
        ContextKey::DefinitionSources,
        self.definition_sources,
        addition.definition_sources,
      )?,
      dtos: merge_slot(ContextKey::Dtos, self.dtos, addition.dtos)?,
    })
  }

  #[cfg(test)]
  pub fn provided_keys(&self) -> Vec<ContextKey> {
    [
      (ContextKey::Types, self.types.is_some()),
      (ContextKey::Signatures, self.signatures.is_some()),
      (ContextKey::Responses, self.responses.is_some()),
      (ContextKey::TypeDefinitions, self.type_definitions.is_some()),
      (ContextKey::DefinitionSources, self.definition_sources.is_some()),
      (ContextKey::Dtos, self.dtos.is_some()),
    ]
    .into_iter()
    .filter_map(|(key, present)| present.then_some(key))
    .collect()
  }

  #[must_use]
  pub fn with_types(mut self, types: IndexMap<String, SchemaNode>) -> Self {
    self.types = Some(types);
    self
  }

  #[must_use]
  pub fn with_signatures(mut self, signatures: LookupTable) -> Self {
    self.signatures = Some(signatures);
    self
  }

  #[must_use]
  pub fn with_responses(mut self, responses: IndexMap<String, SchemaNode>) -> Self {
    self.responses = Some(responses);
    self
  }

  #[must_use]
  pub fn with_type_definitions(mut self, definitions: TypeDefinitions) -> Self {
    self.type_definitions = Some(definitions);
    self
  }

  #[must_use]
  pub fn with_definition_sources(mut self, sources: IndexMap<String, SchemaNode>) -> Self {
    self.definition_sources = Some(sources);
    self
  }

  #[must_use]
  pub fn with_dtos(mut self, dtos: IndexMap<String, String>) -> Self {
    self.dtos = Some(dtos);
    self
  }

  pub fn types(&self) -> Option<&IndexMap<String, SchemaNode>> {
    self.types.as_ref()
  }

  #[cfg(test)]
  pub fn signatures(&self) -> Option<&LookupTable> {
    self.signatures.as_ref()
  }

  pub fn responses(&self) -> Option<&IndexMap<String, SchemaNode>> {
    self.responses.as_ref()
  }

  pub fn type_definitions(&self) -> Option<&TypeDefinitions> {
    self.type_definitions.as_ref()
  }

  pub fn definition_sources(&self) -> Option<&IndexMap<String, SchemaNode>> {
    self.definition_sources.as_ref()
  }

  pub fn dtos(&self) -> Option<&IndexMap<String, String>> {
    self.dtos.as_ref()
  }

  pub fn require_types(&self, stage: &str) -> Result<&IndexMap<String, SchemaNode>, PipelineError> {
    require(self.types(), stage, ContextKey::Types)
  }

  pub fn require_type_definitions(&self, stage: &str) -> Result<&TypeDefinitions, PipelineError> {
    require(self.type_definitions(), stage, ContextKey::TypeDefinitions)
  }

  pub fn require_definition_sources(&self, stage: &str) -> Result<&IndexMap<String, SchemaNode>, PipelineError> {
    require(self.definition_sources(), stage, ContextKey::DefinitionSources)
  }

  pub fn require_dtos(&self, stage: &str) -> Result<&IndexMap<String, String>, PipelineError> {
    require(self.dtos(), stage, ContextKey::Dtos)
  }
}
