use strum::Display;

use crate::generator::ast::{DefinitionKind, TypeDefinition};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationStats {
  pub types_generated: usize,
  pub structs_generated: usize,
  pub enums_generated: usize,
  pub type_aliases_generated: usize,
  pub dtos_generated: usize,
  pub factories_generated: usize,
  pub bodies_discovered: usize,
  pub files_generated: usize,
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  pub fn record_struct(&mut self) {
    self.structs_generated += 1;
    self.types_generated += 1;
  }

  pub fn record_enum(&mut self) {
    self.enums_generated += 1;
    self.types_generated += 1;
  }

  pub fn record_type_alias(&mut self) {
    self.type_aliases_generated += 1;
    self.types_generated += 1;
  }

  pub fn record_definition(&mut self, definition: &TypeDefinition) {
    match definition.kind {
      DefinitionKind::Struct { .. } => self.record_struct(),
      DefinitionKind::Enum { .. } => self.record_enum(),
      DefinitionKind::Alias { .. } => self.record_type_alias(),
    }
  }

  pub fn record_definitions<'a>(&mut self, definitions: impl IntoIterator<Item = &'a TypeDefinition>) {
    for definition in definitions {
      self.record_definition(definition);
    }
  }

  pub fn record_dtos(&mut self, count: usize) {
    self.dtos_generated += count;
  }

  pub fn record_factories(&mut self, count: usize) {
    self.factories_generated += count;
  }

  pub fn record_bodies(&mut self, count: usize) {
    self.bodies_discovered += count;
  }

  pub fn record_files(&mut self, count: usize) {
    self.files_generated += count;
  }

  pub fn record_warning(&mut self, warning: GenerationWarning) {
    self.warnings.push(warning);
  }

  pub fn record_warnings(&mut self, warnings: impl IntoIterator<Item = GenerationWarning>) {
    self.warnings.extend(warnings);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GenerationWarning {
  #[strum(to_string = "Schema '{schema}' is structurally identical to '{canonical}' and was emitted as an alias")]
  DuplicateSchema { schema: String, canonical: String },
  #[strum(to_string = "[{operation}] {media_type} body for '{status}' is not JSON and was skipped")]
  NonJsonBody {
    operation: String,
    status: String,
    media_type: String,
  },
}
