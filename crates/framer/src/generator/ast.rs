//! Flattened type definitions produced by the resolver and consumed by codegen.

use std::collections::HashMap;

use indexmap::IndexMap;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Primitive {
  #[strum(to_string = "integer")]
  Integer,
  #[strum(to_string = "number")]
  Number,
  #[strum(to_string = "boolean")]
  Boolean,
  #[strum(to_string = "string")]
  Text,
  #[strum(to_string = "json")]
  Json,
}

impl Primitive {
  pub fn is_numeric(self) -> bool {
    matches!(self, Self::Integer | Self::Number)
  }
}

/// The type of a struct field, alias target, collection item or map value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
  Primitive(Primitive),
  Named(String),
  /// `non_empty` is set exactly for arrays listed in their parent's `required`.
  List { item: Box<FieldType>, non_empty: bool },
  /// String-keyed map from `additionalProperties`.
  Map { value: Box<FieldType> },
}

impl FieldType {
  pub fn list(item: FieldType, non_empty: bool) -> Self {
    Self::List {
      item: Box::new(item),
      non_empty,
    }
  }

  pub fn map(value: FieldType) -> Self {
    Self::Map { value: Box::new(value) }
  }

  pub fn is_primitive(&self) -> bool {
    matches!(self, Self::Primitive(primitive) if *primitive != Primitive::Json)
  }

  /// Rewrites every named reference found in `renames`.
  pub(crate) fn rename(&mut self, renames: &HashMap<String, String>) {
    match self {
      Self::Primitive(_) => {}
      Self::Named(name) => {
        if let Some(new_name) = renames.get(name.as_str()) {
          name.clone_from(new_name);
        }
      }
      Self::List { item, .. } => item.rename(renames),
      Self::Map { value } => value.rename(renames),
    }
  }

  /// Short human readable form used by `list types`.
  pub fn describe(&self) -> String {
    match self {
      Self::Primitive(primitive) => primitive.to_string(),
      Self::Named(name) => name.clone(),
      Self::List { item, non_empty: true } => format!("[{}, ...]", item.describe()),
      Self::List { item, non_empty: false } => format!("[{}]", item.describe()),
      Self::Map { value } => format!("{{string: {}}}", value.describe()),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DefinitionKind {
  #[strum(to_string = "struct")]
  Struct {
    /// Wire name to field type, in property order.
    fields: IndexMap<String, FieldType>,
    required: Vec<String>,
  },
  #[strum(to_string = "enum")]
  Enum {
    values: Vec<String>,
    /// The struct whose inline property produced this enum.
    owner: Option<String>,
  },
  #[strum(to_string = "alias")]
  Alias { target: FieldType },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDefinition {
  pub name: String,
  pub docs: Option<String>,
  pub kind: DefinitionKind,
}

impl TypeDefinition {
  pub fn new(name: impl Into<String>, kind: DefinitionKind) -> Self {
    Self {
      name: name.into(),
      docs: None,
      kind,
    }
  }

  #[must_use]
  pub fn with_docs(mut self, docs: Option<String>) -> Self {
    self.docs = docs;
    self
  }

  pub fn is_struct(&self) -> bool {
    matches!(self.kind, DefinitionKind::Struct { .. })
  }

  pub fn is_enum(&self) -> bool {
    matches!(self.kind, DefinitionKind::Enum { .. })
  }

  pub fn owner(&self) -> Option<&str> {
    match &self.kind {
      DefinitionKind::Enum { owner, .. } => owner.as_deref(),
      _ => None,
    }
  }

  /// Structural equality: docs and enum owners are ignored.
  pub fn same_shape(&self, other: &Self) -> bool {
    match (&self.kind, &other.kind) {
      (DefinitionKind::Enum { values: left, .. }, DefinitionKind::Enum { values: right, .. }) => left == right,
      (left, right) => left == right,
    }
  }

  pub fn is_required(&self, field: &str) -> bool {
    match &self.kind {
      DefinitionKind::Struct { required, .. } => required.iter().any(|name| name == field),
      _ => false,
    }
  }
}
