use std::collections::{BTreeSet, HashMap};

use indexmap::IndexMap;

use crate::{
  generator::{
    ast::{DefinitionKind, TypeDefinition},
    errors::ResolveError,
  },
  naming::identifiers::ensure_unique,
};

/// Ordered, name-keyed collection of every definition produced during a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeDefinitions {
  definitions: IndexMap<String, TypeDefinition>,
}

impl TypeDefinitions {
  pub fn new() -> Self {
    Self::default()
  }

  /// Merges a batch of definitions coming from one resolution.
  ///
  /// Definitions identical to an existing one are skipped. An owned enum whose
  /// name is taken by a different definition is renamed to `{Owner}{Name}`
  /// (with a numeric suffix if that is taken too), and its owner's fields in the
  /// same batch are rewritten to the new name. Any other clash fails.
  ///
  /// Returns the number of definitions added.
  pub fn absorb(&mut self, batch: Vec<TypeDefinition>) -> Result<usize, ResolveError> {
    let renames = self.plan_enum_renames(&batch);

    let mut added = 0;
    for mut definition in batch {
      apply_renames(&mut definition, &renames);

      match self.definitions.get(&definition.name) {
        None => {
          self.definitions.insert(definition.name.clone(), definition);
          added += 1;
        }
        Some(existing) if existing.same_shape(&definition) => {}
        Some(_) => return Err(ResolveError::ConflictingDefinition { name: definition.name }),
      }
    }
    Ok(added)
  }

  /// Decides a final name for every owned enum of the batch, keyed by
  /// `(owner, original name)`. Only enums that must move appear in the result.
  fn plan_enum_renames(&self, batch: &[TypeDefinition]) -> HashMap<(String, String), String> {
    let mut claimed: IndexMap<String, &TypeDefinition> = IndexMap::new();
    let mut renames = HashMap::new();

    for definition in batch.iter().filter(|definition| definition.is_enum()) {
      let Some(owner) = definition.owner() else {
        continue;
      };

      let holder = self
        .definitions
        .get(&definition.name)
        .or_else(|| claimed.get(&definition.name).copied());

      match holder {
        None => {
          claimed.insert(definition.name.clone(), definition);
        }
        Some(existing) if existing.same_shape(definition) => {}
        Some(_) => {
          let candidate = format!("{owner}{}", definition.name);
          let candidate_holder = self
            .definitions
            .get(&candidate)
            .or_else(|| claimed.get(&candidate).copied());

          let new_name = match candidate_holder {
            Some(existing) if existing.same_shape(definition) => candidate,
            Some(_) => {
              let used: BTreeSet<String> = self.definitions.keys().chain(claimed.keys()).cloned().collect();
              let unique = ensure_unique(&candidate, &used);
              claimed.insert(unique.clone(), definition);
              unique
            }
            None => {
              claimed.insert(candidate.clone(), definition);
              candidate
            }
          };

          renames.insert((owner.to_string(), definition.name.clone()), new_name);
        }
      }
    }

    renames
  }

  pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
    self.definitions.get(name)
  }

  pub fn contains(&self, name: &str) -> bool {
    self.definitions.contains_key(name)
  }

  pub fn iter(&self) -> impl Iterator<Item = &TypeDefinition> {
    self.definitions.values()
  }

  pub fn structs(&self) -> impl Iterator<Item = &TypeDefinition> {
    self.iter().filter(|definition| definition.is_struct())
  }

  #[cfg(test)]
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.definitions.keys().map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.definitions.len()
  }

  pub fn is_empty(&self) -> bool {
    self.definitions.is_empty()
  }
}

impl<'a> IntoIterator for &'a TypeDefinitions {
  type Item = &'a TypeDefinition;
  type IntoIter = indexmap::map::Values<'a, String, TypeDefinition>;

  fn into_iter(self) -> Self::IntoIter {
    self.definitions.values()
  }
}

fn apply_renames(definition: &mut TypeDefinition, renames: &HashMap<(String, String), String>) {
  if renames.is_empty() {
    return;
  }

  if let Some(owner) = definition.owner() {
    let key = (owner.to_string(), definition.name.clone());
    if let Some(new_name) = renames.get(&key) {
      definition.name.clone_from(new_name);
    }
    return;
  }

  if let DefinitionKind::Struct { fields, .. } = &mut definition.kind {
    let owned: HashMap<String, String> = renames
      .iter()
      .filter(|((owner, _), _)| *owner == definition.name)
      .map(|((_, old), new)| (old.clone(), new.clone()))
      .collect();

    for field in fields.values_mut() {
      field.rename(&owned);
    }
  }
}
