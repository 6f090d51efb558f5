use indexmap::IndexMap;
use serde_json::{Value, json};

use crate::generator::{
  ast::{DefinitionKind, FieldType, TypeDefinition},
  document::SchemaNode,
};

pub(super) fn schema(value: Value) -> SchemaNode {
  serde_json::from_value(value).expect("valid schema node")
}

pub(super) fn schemas(value: Value) -> IndexMap<String, SchemaNode> {
  serde_json::from_value(value).expect("valid schema table")
}

/// `Category`, `Tag` and `Pet`, with `Pet` inlining the other two.
pub(super) fn petstore_schemas() -> IndexMap<String, SchemaNode> {
  let category = json!({
    "type": "object",
    "properties": {
      "id": { "type": "integer", "format": "int64" },
      "name": { "type": "string" }
    }
  });
  let tag = json!({
    "type": "object",
    "properties": {
      "id": { "type": "integer", "format": "int64" },
      "name": { "type": "string" }
    },
    "required": ["name"]
  });

  schemas(json!({
    "Category": category,
    "Tag": tag,
    "Pet": {
      "type": "object",
      "required": ["name", "photoUrls"],
      "properties": {
        "id": { "type": "integer", "format": "int64" },
        "name": { "type": "string" },
        "category": category,
        "photoUrls": { "type": "array", "items": { "type": "string" } },
        "tags": { "type": "array", "items": tag },
        "status": { "type": "string", "enum": ["available", "pending", "sold"] }
      }
    }
  }))
}

pub(super) fn struct_fields(definition: &TypeDefinition) -> &IndexMap<String, FieldType> {
  match &definition.kind {
    DefinitionKind::Struct { fields, .. } => fields,
    other => panic!("expected struct `{}`, found {other}", definition.name),
  }
}

pub(super) fn enum_values(definition: &TypeDefinition) -> &[String] {
  match &definition.kind {
    DefinitionKind::Enum { values, .. } => values,
    other => panic!("expected enum `{}`, found {other}", definition.name),
  }
}

pub(super) fn named(name: &str) -> FieldType {
  FieldType::Named(name.to_string())
}
