use serde_json::{Value, json};

use crate::generator::{
  codegen::Visibility,
  document::ApiDescription,
  pipeline::{GenerationOptions, Pipeline, PipelineOutput, ProcessorContext, Stage, TypesStage},
};

pub(crate) fn api(value: Value) -> ApiDescription {
  serde_json::from_value(value).expect("valid API description")
}

fn category() -> Value {
  json!({
    "type": "object",
    "properties": {
      "id": { "type": "integer", "format": "int64" },
      "name": { "type": "string" }
    }
  })
}

fn tag() -> Value {
  json!({
    "type": "object",
    "properties": {
      "id": { "type": "integer", "format": "int64" },
      "name": { "type": "string" }
    },
    "required": ["name"]
  })
}

fn pet() -> Value {
  json!({
    "type": "object",
    "required": ["name", "photoUrls"],
    "properties": {
      "id": { "type": "integer", "format": "int64" },
      "name": { "type": "string" },
      "category": category(),
      "photoUrls": { "type": "array", "items": { "type": "string" } },
      "tags": { "type": "array", "items": tag() },
      "status": {
        "type": "string",
        "description": "pet status in the store",
        "enum": ["available", "pending", "sold"]
      }
    }
  })
}

/// A dereferenced petstore: three named schemas, three operations, one inline
/// error body and one array body.
pub(crate) fn petstore_api() -> ApiDescription {
  api(json!({
    "info": { "title": "Swagger Petstore", "version": "1.0.0", "description": "A sample API" },
    "paths": {
      "/pets": {
        "get": {
          "operationId": "listPets",
          "responses": {
            "200": {
              "description": "A list of pets",
              "content": { "application/json": { "schema": { "type": "array", "items": pet() } } }
            }
          }
        },
        "post": {
          "operationId": "addPet",
          "requestBody": { "content": { "application/json": { "schema": pet() } } },
          "responses": {
            "200": { "content": { "application/json; charset=utf-8": { "schema": pet() } } },
            "405": { "description": "Invalid input" }
          }
        }
      },
      "/pets/{petId}": {
        "get": {
          "responses": {
            "200": { "content": { "application/json": { "schema": pet() } } },
            "default": {
              "content": {
                "application/json": {
                  "schema": {
                    "type": "object",
                    "required": ["code", "message"],
                    "properties": {
                      "code": { "type": "integer", "format": "int32" },
                      "message": { "type": "string" }
                    }
                  }
                }
              }
            }
          }
        },
        "delete": {
          "operationId": "deletePet",
          "responses": {
            "400": { "content": { "text/plain": { "schema": { "type": "string" } } } }
          }
        }
      }
    },
    "components": {
      "schemas": {
        "Category": category(),
        "Tag": tag(),
        "Pet": pet()
      }
    }
  }))
}

pub(crate) fn run_standard(api: &ApiDescription) -> PipelineOutput {
  Pipeline::standard(GenerationOptions::default())
    .run(api, ProcessorContext::new())
    .expect("pipeline succeeds")
}

/// The context produced by the types stage alone.
pub(crate) fn types_context(api: &ApiDescription, all_schemas: bool) -> ProcessorContext {
  TypesStage::new(Visibility::Public, all_schemas)
    .add_context(api, &ProcessorContext::new())
    .expect("types stage succeeds")
}
