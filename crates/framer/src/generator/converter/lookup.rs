use std::collections::BTreeSet;

use indexmap::IndexMap;

use super::hashing::CanonicalSchema;
use crate::{
  generator::{document::SchemaNode, errors::ResolveError},
  naming::identifiers::{ensure_unique, to_rust_type_name},
};

/// Maps structural signatures to the type name of the first top-level schema
/// registered with that signature. Append-only for the duration of a run.
#[derive(Debug, Clone, Default)]
pub struct LookupTable {
  entries: IndexMap<CanonicalSchema, String>,
  /// Every registered type name, including those whose signature was already taken.
  claimed: BTreeSet<String>,
}

impl LookupTable {
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers every named schema in declaration order.
  pub fn from_schemas(schemas: &IndexMap<String, SchemaNode>) -> Result<Self, ResolveError> {
    let mut table = Self::new();
    for (name, node) in schemas {
      table.register(name, node)?;
    }
    Ok(table)
  }

  /// Records `signature -> to_rust_type_name(name)` unless the signature is
  /// already taken. Returns whether a new entry was added.
  pub fn register(&mut self, name: &str, node: &SchemaNode) -> Result<bool, ResolveError> {
    let signature = CanonicalSchema::from_node(node)?;
    let name = to_rust_type_name(name);
    self.claimed.insert(name.clone());
    if self.entries.contains_key(&signature) {
      return Ok(false);
    }
    self.entries.insert(signature, name);
    Ok(true)
  }

  /// Exact signature match only.
  pub fn lookup(&self, node: &SchemaNode) -> Result<Option<&str>, ResolveError> {
    let signature = CanonicalSchema::from_node(node)?;
    Ok(self.entries.get(&signature).map(String::as_str))
  }

  #[cfg(test)]
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.entries.values().map(String::as_str)
  }

  /// `candidate`, or its first numbered variant that no registered schema uses.
  ///
  /// Names synthesized for unmatched nested objects go through here: such an
  /// object never shares its shape with a named schema, so sharing the name
  /// would define one type twice.
  pub fn unclaimed_name(&self, candidate: &str) -> String {
    ensure_unique(candidate, &self.claimed)
  }
}
