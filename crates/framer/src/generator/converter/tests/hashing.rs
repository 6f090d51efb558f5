use std::collections::HashSet;

use serde_json::json;

use super::support::schema;
use crate::generator::converter::hashing::CanonicalSchema;

#[test]
fn test_property_order_does_not_change_signature() {
  let first = schema(json!({
    "type": "object",
    "properties": { "a": { "type": "string" }, "b": { "type": "integer" } },
    "required": ["a", "b"]
  }));
  let second = schema(json!({
    "required": ["b", "a"],
    "properties": { "b": { "type": "integer" }, "a": { "type": "string" } },
    "type": "object"
  }));

  assert_eq!(
    CanonicalSchema::from_node(&first).unwrap(),
    CanonicalSchema::from_node(&second).unwrap()
  );
}

#[test]
fn test_resolved_name_is_not_part_of_signature() {
  let plain = schema(json!({ "type": "object", "properties": { "id": { "type": "integer" } } }));
  let mut annotated = plain.clone();
  annotated.resolved_name = Some("Thing".to_string());

  let plain_signature = CanonicalSchema::from_node(&plain).unwrap();
  let annotated_signature = CanonicalSchema::from_node(&annotated).unwrap();
  assert_eq!(plain_signature, annotated_signature);
}

#[test]
fn test_different_shapes_differ() {
  let integer = schema(json!({ "type": "object", "properties": { "id": { "type": "integer" } } }));
  let string = schema(json!({ "type": "object", "properties": { "id": { "type": "string" } } }));

  let signatures: HashSet<_> = [integer, string]
    .iter()
    .map(|node| CanonicalSchema::from_node(node).unwrap())
    .collect();
  assert_eq!(signatures.len(), 2);
}

#[test]
fn test_property_named_required_is_left_alone() {
  let boolean = schema(json!({
    "type": "object",
    "properties": { "required": { "type": "boolean" } }
  }));
  let integer = schema(json!({
    "type": "object",
    "properties": { "required": { "type": "integer" } }
  }));
  assert_ne!(
    CanonicalSchema::from_node(&boolean).unwrap(),
    CanonicalSchema::from_node(&integer).unwrap()
  );
}
