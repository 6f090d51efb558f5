use std::collections::{BTreeMap, BTreeSet};

use petgraph::{algo::kosaraju_scc, graphmap::DiGraphMap};
use serde_json::{Map, Value};

use crate::generator::errors::LoadError;

const REF_KEY: &str = "$ref";
const LOCAL_PREFIX: char = '#';

/// Returns a copy of `document` in which every local `$ref` object is replaced
/// by a copy of its target. Sibling keys of a `$ref` are dropped.
///
/// Fails on references that leave the document or point nowhere, and on any
/// reference cycle, since a cyclic document cannot be inlined.
pub fn dereference(document: &Value) -> Result<Value, LoadError> {
  let dependencies = reference_graph(document)?;
  if let Some(cycle) = find_cycles(&dependencies).into_iter().next() {
    return Err(LoadError::CircularReference { cycle });
  }
  inline(document, document)
}

/// Every reference target reachable from the document, mapped to the targets
/// referenced inside it.
fn reference_graph(document: &Value) -> Result<BTreeMap<String, BTreeSet<String>>, LoadError> {
  let mut dependencies = BTreeMap::new();
  let mut pending: Vec<String> = collect_refs(document).into_iter().collect();

  while let Some(reference) = pending.pop() {
    if dependencies.contains_key(&reference) {
      continue;
    }
    let target = resolve(document, &reference)?;
    let inner = collect_refs(target);
    pending.extend(inner.iter().filter(|next| !dependencies.contains_key(*next)).cloned());
    dependencies.insert(reference, inner);
  }

  Ok(dependencies)
}

fn find_cycles(dependencies: &BTreeMap<String, BTreeSet<String>>) -> Vec<Vec<String>> {
  let mut graph = DiGraphMap::<&str, ()>::new();
  for (node, deps) in dependencies {
    graph.add_node(node.as_str());
    for dep in deps {
      graph.add_edge(node.as_str(), dep.as_str(), ());
    }
  }

  let mut cycles: Vec<Vec<String>> = kosaraju_scc(&graph)
    .into_iter()
    .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
    .map(|scc| {
      let mut members: Vec<String> = scc.into_iter().map(String::from).collect();
      members.sort();
      members.push(members[0].clone());
      members
    })
    .collect();
  cycles.sort();
  cycles
}

/// The `$ref` strings found anywhere inside `value`.
fn collect_refs(value: &Value) -> BTreeSet<String> {
  let mut refs = BTreeSet::new();
  let mut stack = vec![value];
  while let Some(current) = stack.pop() {
    match current {
      Value::Object(map) => {
        if let Some(Value::String(reference)) = map.get(REF_KEY) {
          refs.insert(reference.clone());
        } else {
          stack.extend(map.values());
        }
      }
      Value::Array(items) => stack.extend(items),
      _ => {}
    }
  }
  refs
}

fn resolve<'a>(document: &'a Value, reference: &str) -> Result<&'a Value, LoadError> {
  reference
    .strip_prefix(LOCAL_PREFIX)
    .and_then(|pointer| document.pointer(pointer))
    .ok_or_else(|| LoadError::UnresolvableReference {
      reference: reference.to_string(),
    })
}

fn inline(value: &Value, document: &Value) -> Result<Value, LoadError> {
  match value {
    Value::Object(map) => {
      if let Some(Value::String(reference)) = map.get(REF_KEY) {
        return inline(resolve(document, reference)?, document);
      }
      let mut inlined = Map::with_capacity(map.len());
      for (key, child) in map {
        inlined.insert(key.clone(), inline(child, document)?);
      }
      Ok(Value::Object(inlined))
    }
    Value::Array(items) => items
      .iter()
      .map(|item| inline(item, document))
      .collect::<Result<Vec<_>, _>>()
      .map(Value::Array),
    other => Ok(other.clone()),
  }
}
