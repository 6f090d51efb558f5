use indexmap::IndexMap;
use serde_json::{Value, json};

use super::{render, struct_definition};
use crate::generator::{
  ast::{DefinitionKind, FieldType, Primitive, TypeDefinition},
  codegen::{
    Visibility,
    mocks::{MockSources, generate_mocks, is_id_like},
  },
  converter::TypeDefinitions,
  errors::PipelineError,
  pipeline::{
    GenerationOptions, Pipeline, ProcessorContext,
    tests::support::api,
  },
};

/// Generates the mocker file for a single named schema `Sample` with `properties`,
/// every property required.
fn sample_mocker(properties: Value) -> Result<String, PipelineError> {
  let required: Vec<String> = properties
    .as_object()
    .map(|map| map.keys().cloned().collect())
    .unwrap_or_default();
  let api = api(json!({
    "info": { "title": "Samples", "version": "1" },
    "components": {
      "schemas": {
        "Sample": { "type": "object", "required": required, "properties": properties }
      }
    }
  }));
  let options = GenerationOptions {
    all_schemas: true,
    ..GenerationOptions::default()
  };
  let output = Pipeline::standard(options).run(&api, ProcessorContext::new())?;
  Ok(output.generated["dto_mocker.rs"].clone())
}

fn mock_value(property: Value) -> String {
  sample_mocker(json!({ "value": property })).expect("mocks generate")
}

fn manual_mocker(definitions: Vec<TypeDefinition>, dtos: &[&str]) -> Result<String, PipelineError> {
  let mut registry = TypeDefinitions::new();
  registry.absorb(definitions)?;
  let sources = IndexMap::new();
  let types = IndexMap::new();
  let dtos: IndexMap<String, String> = dtos
    .iter()
    .map(|name| (name.to_string(), format!("{name}Dto")))
    .collect();

  let tokens = generate_mocks(&MockSources::new(&registry, &sources, &types), &dtos, Visibility::Public)?;
  Ok(render(tokens))
}

#[test]
fn test_id_like_names() {
  for name in ["id", "uuid", "guid", "id_owner", "owner_id", "idToken"] {
    assert!(is_id_like(name), "{name} should be id-like");
  }
  for name in ["idle", "identity", "ids", "ownerId", "paid"] {
    assert!(!is_id_like(name), "{name} should not be id-like");
  }
}

#[test]
fn test_id_like_fields_get_id_values() {
  let code = sample_mocker(json!({
    "id": { "type": "integer", "minimum": 5000 },
    "guid": { "type": "string", "format": "email" },
    "owner_id": { "type": "boolean" }
  }))
  .unwrap();

  assert!(code.contains("id: mock::int(100, 999)"));
  assert!(code.contains("guid: mock::uuid()"));
  assert!(code.contains("owner_id: mock::boolean()"));
}

#[test]
fn test_integer_bounds() {
  assert!(mock_value(json!({ "type": "integer" })).contains("value: mock::int_from(1)"));
  assert!(mock_value(json!({ "type": "integer", "minimum": -5, "maximum": 5 })).contains("value: mock::int(-5, 5)"));
  assert!(
    mock_value(json!({ "type": "integer", "minimum": 0, "maximum": 10, "exclusiveMinimum": true, "exclusiveMaximum": true }))
      .contains("value: mock::int(1, 9)")
  );
  assert!(mock_value(json!({ "type": "integer", "exclusiveMinimum": 5 })).contains("value: mock::int_from(6)"));
  assert!(mock_value(json!({ "type": "integer", "maximum": 50 })).contains("value: mock::int(1, 50)"));
}

#[test]
fn test_fractional_integer_bounds_round_inward() {
  assert!(
    mock_value(json!({ "type": "integer", "exclusiveMinimum": 1.5, "exclusiveMaximum": 4.5 }))
      .contains("value: mock::int(2, 4)")
  );
  assert!(
    mock_value(json!({ "type": "integer", "minimum": 1.5, "maximum": 4.5 })).contains("value: mock::int(2, 4)")
  );
  assert!(
    mock_value(json!({ "type": "integer", "exclusiveMinimum": -2.5, "exclusiveMaximum": 3 }))
      .contains("value: mock::int(-2, 2)")
  );
}

#[test]
fn test_integer_multiple_of() {
  assert!(
    mock_value(json!({ "type": "integer", "minimum": 10, "multipleOf": 5 }))
      .contains("value: mock::int_multiple(10, 1010, 5)")
  );
  assert!(
    mock_value(json!({ "type": "integer", "maximum": 100, "multipleOf": 25 }))
      .contains("value: mock::int_multiple(1, 100, 25)")
  );
}

#[test]
fn test_number_bounds() {
  assert!(mock_value(json!({ "type": "number" })).contains("value: mock::float_from(1.0)"));
  assert!(mock_value(json!({ "type": "number", "minimum": 0.5, "maximum": 2.5 })).contains("value: mock::float(0.5, 2.5)"));
}

#[test]
fn test_exclusive_number_bounds_stay_inside_the_range() {
  assert!(
    mock_value(json!({ "type": "number", "exclusiveMinimum": 0.5, "exclusiveMaximum": 2.5 }))
      .contains("value: mock::float(0.5000000000000001, 2.4999999999999996)")
  );

  let unit = mock_value(json!({
    "type": "number",
    "minimum": 0,
    "maximum": 1,
    "exclusiveMinimum": true,
    "exclusiveMaximum": true
  }));
  assert!(unit.contains("0.9999999999999999"), "{unit}");
  assert!(!unit.contains("mock::float(0.0,"), "{unit}");
  assert!(!unit.contains("mock::float(1.0"), "{unit}");
}

#[test]
fn test_string_formats() {
  let cases = [
    ("email", "mock::email()"),
    ("uuid", "mock::uuid()"),
    ("uri", "mock::url()"),
    ("hostname", "mock::url()"),
    ("ipv4", "mock::ipv4()"),
    ("ipv6", "mock::ipv6()"),
    ("token", "mock::jwt()"),
    ("date", "mock::date()"),
    ("date-time", "mock::date_time()"),
    ("password", "mock::words(1, 3)"),
  ];
  for (format, expected) in cases {
    let code = mock_value(json!({ "type": "string", "format": format }));
    assert!(code.contains(&format!("value: {expected}")), "format {format} should mock as {expected}");
  }
}

#[test]
fn test_collections() {
  assert!(
    mock_value(json!({ "type": "array", "items": { "type": "string", "format": "email" } }))
      .contains("value: mock::non_empty_vec(1, 10, || mock::email())")
  );
  assert!(
    mock_value(json!({ "type": "object", "additionalProperties": { "type": "integer", "maximum": 3 } }))
      .contains("value: mock::map(1, 3, || mock::int(1, 3))")
  );
  assert!(mock_value(json!({ "type": "boolean" })).contains("value: mock::boolean()"));
}

#[test]
fn test_faker_expressions() {
  assert!(mock_value(json!({ "type": "string", "x-faker": "words(2, 4)" })).contains("value: mock::words(2, 4)"));
  assert!(mock_value(json!({ "type": "string", "x-faker": "mock::email()" })).contains("value: mock::email()"));
  assert!(
    mock_value(json!({ "type": "string", "x-faker": "words(1, 2).to_uppercase()" }))
      .contains("value: mock::words(1, 2).to_uppercase()")
  );
}

#[test]
fn test_invalid_faker_expression() {
  for expression in ["uuid", "not a call", "42"] {
    let err = sample_mocker(json!({ "value": { "type": "string", "x-faker": expression } })).unwrap_err();
    match err {
      PipelineError::InvalidMockExpression {
        type_name,
        field,
        expression: reported,
      } => {
        assert_eq!(type_name, "Sample");
        assert_eq!(field, "value");
        assert_eq!(reported, expression);
      }
      other => panic!("unexpected error: {other}"),
    }
  }
}

#[test]
fn test_named_references() {
  let code = manual_mocker(
    vec![
      struct_definition(
        "Owner",
        vec![
          ("pet", FieldType::Named("Pet".to_string())),
          ("mood", FieldType::Named("Mood".to_string())),
          ("labels", FieldType::Named("Labels".to_string())),
        ],
        &["pet", "mood", "labels"],
      ),
      struct_definition("Pet", vec![("name", FieldType::Primitive(Primitive::Text))], &["name"]),
      TypeDefinition::new(
        "Mood",
        DefinitionKind::Enum {
          values: vec!["calm".to_string()],
          owner: None,
        },
      ),
      TypeDefinition::new(
        "Labels",
        DefinitionKind::Alias {
          target: FieldType::list(FieldType::Primitive(Primitive::Text), false),
        },
      ),
    ],
    &["Owner", "Pet"],
  )
  .unwrap();

  assert!(code.contains("pet: create_pet_factory().into_inner()"));
  assert!(code.contains("mood: mock::pick(types::Mood::VARIANTS)"));
  assert!(code.contains("labels: mock::vec(1, 10, || mock::words(1, 3))"));
  assert!(code.contains("pub fn create_owner_factory() -> dto::OwnerDto"));
  assert!(code.contains("pub fn create_pet_factory_with(overrides: impl FnOnce(&mut types::Pet)) -> dto::PetDto"));
  assert!(code.contains("dto::PetDto::new(model)"));
}

#[test]
fn test_optional_fields_are_wrapped() {
  let code = manual_mocker(
    vec![struct_definition(
      "Note",
      vec![
        ("body", FieldType::Primitive(Primitive::Text)),
        ("extra", FieldType::Primitive(Primitive::Json)),
        ("lines", FieldType::list(FieldType::Primitive(Primitive::Text), false)),
      ],
      &[],
    )],
    &["Note"],
  )
  .unwrap();

  assert!(code.contains("body: Some(mock::words(1, 3))"));
  assert!(code.contains("extra: Some(mock::json())"));
  assert!(code.contains("lines: mock::vec(1, 10, || mock::words(1, 3))"));
}

#[test]
fn test_unknown_references_fail() {
  let dangling = struct_definition("Owner", vec![("pet", FieldType::Named("Ghost".to_string()))], &["pet"]);
  let err = manual_mocker(vec![dangling.clone()], &["Owner"]).unwrap_err();
  assert!(matches!(
    err,
    PipelineError::UnknownType { ref type_name, ref name } if type_name == "Owner" && name == "Ghost"
  ));

  let err = manual_mocker(vec![], &["Missing"]).unwrap_err();
  assert!(matches!(err, PipelineError::UnknownType { ref name, .. } if name == "Missing"));
}
