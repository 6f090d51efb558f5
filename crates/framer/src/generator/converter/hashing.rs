use std::{cmp::Ordering, hash::Hash};

use json_canon::to_string as to_canonical_json;
use serde_json::Value;

use crate::generator::{document::SchemaNode, errors::ResolveError};

/// Canonical form of a schema node, used as the structural signature.
///
/// Two nodes that differ only in property order, JSON key order or the order
/// of their `required` list produce equal signatures. The `resolved_name`
/// annotation is never serialized and so never takes part.
#[derive(Debug, Clone, Eq)]
pub struct CanonicalSchema(String);

impl CanonicalSchema {
  /// Serializes the node, sorts every `required` array, then encodes the result
  /// as RFC 8785 canonical JSON.
  pub fn from_node(node: &SchemaNode) -> Result<Self, ResolveError> {
    let mut value = serde_json::to_value(node).map_err(|e| ResolveError::Signature(e.to_string()))?;

    normalize_required(&mut value);

    let canonical_json = to_canonical_json(&value).map_err(|e| ResolveError::Signature(e.to_string()))?;

    Ok(CanonicalSchema(canonical_json))
  }
}

impl PartialEq for CanonicalSchema {
  fn eq(&self, other: &Self) -> bool {
    self.0 == other.0
  }
}

impl PartialOrd for CanonicalSchema {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for CanonicalSchema {
  fn cmp(&self, other: &Self) -> Ordering {
    self.0.cmp(&other.0)
  }
}

impl Hash for CanonicalSchema {
  /// Feeds a BLAKE3 digest of the canonical JSON to the hasher instead of the
  /// full string, which can be large for deeply nested schemas.
  fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
    let hash = blake3::hash(self.0.as_bytes());
    hash.as_bytes().hash(state);
  }
}

/// Recursively sorts `required` arrays of string names.
///
/// A property that happens to be called `required` maps to a schema object,
/// not an array, and is left alone.
fn normalize_required(value: &mut Value) {
  match value {
    Value::Object(map) => {
      if let Some(Value::Array(names)) = map.get_mut("required") {
        sort_string_array_in_place(names);
      }

      for value in map.values_mut() {
        normalize_required(value);
      }
    }
    Value::Array(items) => {
      for item in items {
        normalize_required(item);
      }
    }
    _ => {}
  }
}

fn sort_string_array_in_place(arr: &mut Vec<Value>) {
  let mut strings: Vec<String> = arr.iter().filter_map(|v| v.as_str().map(String::from)).collect();

  if strings.len() == arr.len() {
    strings.sort_unstable();
    *arr = strings.into_iter().map(Value::String).collect();
  }
}
