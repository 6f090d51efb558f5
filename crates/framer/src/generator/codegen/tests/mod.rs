mod mocks;

use indexmap::IndexMap;

use crate::generator::{
  ast::{DefinitionKind, FieldType, TypeDefinition},
  codegen::format_file,
};

fn struct_definition(name: &str, fields: Vec<(&str, FieldType)>, required: &[&str]) -> TypeDefinition {
  let fields: IndexMap<String, FieldType> = fields
    .into_iter()
    .map(|(wire, field_type)| (wire.to_string(), field_type))
    .collect();
  TypeDefinition::new(
    name,
    DefinitionKind::Struct {
      fields,
      required: required.iter().map(ToString::to_string).collect(),
    },
  )
}

fn render(tokens: proc_macro2::TokenStream) -> String {
  format_file("test.rs", tokens).expect("generated code parses")
}
