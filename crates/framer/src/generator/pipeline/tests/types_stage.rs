use serde_json::json;

use super::support::{api, petstore_api, types_context};
use crate::generator::{
  ast::{DefinitionKind, FieldType, Primitive},
  document::{Method, Operation},
  metrics::{GenerationStats, GenerationWarning},
  pipeline::{
    ContextKey, GeneratedOutput, GenerationOptions, Pipeline, ProcessorContext, Stage, TypesStage,
    types::{operation_name, status_label},
  },
};

fn definition_names(context: &ProcessorContext) -> Vec<&str> {
  context.type_definitions().unwrap().names().collect()
}

#[test]
fn test_operation_names() {
  let anonymous = Operation::default();
  assert_eq!(operation_name("/pets/{petId}", Method::Get, &anonymous), "GetPetsPetId");
  assert_eq!(operation_name("/store/inventory", Method::Delete, &anonymous), "DeleteStoreInventory");

  let named = Operation {
    operation_id: Some("listPets".to_string()),
    ..Operation::default()
  };
  assert_eq!(operation_name("/pets", Method::Get, &named), "ListPets");
}

#[test]
fn test_status_labels() {
  assert_eq!(status_label("200"), "200");
  assert_eq!(status_label("4xx"), "4XX");
  assert_eq!(status_label("default"), "Default");
}

#[test]
fn test_provides_all_types_slots() {
  let context = types_context(&petstore_api(), false);

  assert_eq!(
    context.provided_keys(),
    vec![
      ContextKey::Types,
      ContextKey::Signatures,
      ContextKey::Responses,
      ContextKey::TypeDefinitions,
      ContextKey::DefinitionSources,
    ]
  );
  assert_eq!(context.signatures().unwrap().names().count(), 3);
  assert_eq!(
    context.types().unwrap().keys().collect::<Vec<_>>(),
    vec!["Category", "Tag", "Pet"]
  );
}

#[test]
fn test_bodies_are_keyed_by_matching_schema_or_synthesized_name() {
  let context = types_context(&petstore_api(), false);

  let responses: Vec<_> = context.responses().unwrap().keys().map(String::as_str).collect();
  assert_eq!(
    responses,
    vec!["ListPets200Response", "Pet", "GetPetsPetIdDefaultResponse"]
  );
  assert_eq!(
    context.responses().unwrap()["Pet"].resolved_name.as_deref(),
    Some("Pet")
  );
}

#[test]
fn test_definitions_follow_document_order() {
  let context = types_context(&petstore_api(), false);

  assert_eq!(
    definition_names(&context),
    vec![
      "Pet",
      "Category",
      "Tag",
      "StatusEnum",
      "ListPets200Response",
      "GetPetsPetIdDefaultResponse",
    ]
  );

  let list = context.type_definitions().unwrap().get("ListPets200Response").unwrap();
  assert_eq!(
    list.kind,
    DefinitionKind::Alias {
      target: FieldType::list(FieldType::Named("Pet".to_string()), false)
    }
  );
}

#[test]
fn test_all_schemas_resolves_named_schemas_first() {
  let context = types_context(&petstore_api(), true);

  assert_eq!(
    definition_names(&context),
    vec![
      "Category",
      "Tag",
      "Pet",
      "StatusEnum",
      "ListPets200Response",
      "GetPetsPetIdDefaultResponse",
    ]
  );
}

#[test]
fn test_definition_sources_cover_every_struct() {
  let context = types_context(&petstore_api(), false);
  let definitions = context.type_definitions().unwrap();
  let sources = context.definition_sources().unwrap();

  for definition in definitions.structs() {
    assert!(sources.contains_key(&definition.name), "missing source for {}", definition.name);
  }
  assert!(!sources.contains_key("StatusEnum"));
}

#[test]
fn test_inline_collection_and_map_roots_get_aliases() {
  let api = api(json!({
    "info": { "title": "Inventory", "version": "1" },
    "paths": {
      "/inventory": {
        "get": {
          "operationId": "getInventory",
          "responses": {
            "200": {
              "content": {
                "application/json": {
                  "schema": { "type": "object", "additionalProperties": { "type": "integer" } }
                }
              }
            }
          }
        }
      },
      "/lines": {
        "get": {
          "operationId": "listLines",
          "responses": {
            "200": {
              "content": {
                "application/json": {
                  "schema": {
                    "type": "array",
                    "items": { "type": "object", "properties": { "sku": { "type": "string" } } }
                  }
                }
              }
            }
          }
        }
      }
    }
  }));

  let context = types_context(&api, false);
  let definitions = context.type_definitions().unwrap();

  assert_eq!(
    definitions.names().collect::<Vec<_>>(),
    vec!["GetInventory200Response", "ListLines200ResponseItem", "ListLines200Response"]
  );
  assert_eq!(
    definitions.get("GetInventory200Response").unwrap().kind,
    DefinitionKind::Alias {
      target: FieldType::map(FieldType::Primitive(Primitive::Integer))
    }
  );
  assert_eq!(
    definitions.get("ListLines200Response").unwrap().kind,
    DefinitionKind::Alias {
      target: FieldType::list(FieldType::Named("ListLines200ResponseItem".to_string()), false)
    }
  );
}

#[test]
fn test_structurally_identical_schema_becomes_alias_with_warning() {
  let shape = json!({ "type": "object", "properties": { "name": { "type": "string" } } });
  let api = api(json!({
    "info": { "title": "Zoo", "version": "1" },
    "components": { "schemas": { "Pet": shape, "Animal": shape } }
  }));

  let stage = TypesStage::new(Default::default(), true);
  let context = types_context(&api, true);
  let definitions = context.type_definitions().unwrap();

  assert_eq!(definitions.names().collect::<Vec<_>>(), vec!["Pet", "Animal"]);
  assert_eq!(
    definitions.get("Animal").unwrap().kind,
    DefinitionKind::Alias {
      target: FieldType::Named("Pet".to_string())
    }
  );

  let mut stats = GenerationStats::default();
  stage.record_stats(&api, &context, &mut stats);
  assert_eq!(
    stats.warnings,
    vec![GenerationWarning::DuplicateSchema {
      schema: "Animal".to_string(),
      canonical: "Pet".to_string(),
    }]
  );
  assert_eq!(stats.structs_generated, 1);
  assert_eq!(stats.type_aliases_generated, 1);
}

#[test]
fn test_non_json_bodies_are_reported() {
  let api = petstore_api();
  let context = types_context(&api, false);

  let mut stats = GenerationStats::default();
  TypesStage::default().record_stats(&api, &context, &mut stats);

  assert_eq!(stats.bodies_discovered, 3);
  assert_eq!(
    stats.warnings,
    vec![GenerationWarning::NonJsonBody {
      operation: "DeletePet".to_string(),
      status: "400".to_string(),
      media_type: "text/plain".to_string(),
    }]
  );
}

#[test]
fn test_generate_renders_definitions() {
  let context = types_context(&petstore_api(), false);
  let output = TypesStage::default().generate(&context).unwrap();

  let GeneratedOutput::Single(code) = output else {
    panic!("types stage renders a single file");
  };
  assert!(code.contains("pub use framer_support::NonEmptyVec;"));
  assert!(code.contains("pub struct Pet {"));
  assert!(code.contains("pub enum StatusEnum {"));
  assert!(code.contains("pub type ListPets200Response = Vec<Pet>;"));
}

#[test]
fn test_nested_object_named_like_a_schema_gets_numbered() {
  let api = api(json!({
    "info": { "title": "Clinic", "version": "1" },
    "components": {
      "schemas": {
        "PetOwner": { "type": "object", "properties": { "y": { "type": "integer" } } },
        "Pet": {
          "type": "object",
          "properties": {
            "owner": { "type": "object", "properties": { "x": { "type": "string" } } }
          }
        }
      }
    }
  }));

  let context = types_context(&api, true);
  let definitions = context.type_definitions().unwrap();

  assert_eq!(definitions.names().collect::<Vec<_>>(), vec!["PetOwner", "Pet", "PetOwner2"]);
  let DefinitionKind::Struct { fields, .. } = &definitions.get("Pet").unwrap().kind else {
    panic!("Pet is a struct");
  };
  assert_eq!(fields["owner"], FieldType::Named("PetOwner2".to_string()));

  let output = Pipeline::standard(GenerationOptions {
    all_schemas: true,
    ..GenerationOptions::default()
  })
  .run(&api, ProcessorContext::new())
  .unwrap();
  assert!(output.generated["types.rs"].contains("pub struct PetOwner2 {"));
  assert!(output.generated["dto.rs"].contains("pub struct PetOwner2Dto(types::PetOwner2);"));
}
