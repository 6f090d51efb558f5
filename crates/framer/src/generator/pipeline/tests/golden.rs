use quote::ToTokens;

use super::support::petstore_api;
use crate::generator::pipeline::{GenerationOptions, Pipeline, ProcessorContext};

const FIXTURES: [(&str, &str); 4] = [
  ("types.rs", include_str!("../../../../fixtures/petstore/types.rs")),
  ("dto.rs", include_str!("../../../../fixtures/petstore/dto.rs")),
  ("dto_mocker.rs", include_str!("../../../../fixtures/petstore/dto_mocker.rs")),
  ("mod.rs", include_str!("../../../../fixtures/petstore/mod.rs")),
];

fn tokens(file_name: &str, code: &str) -> String {
  let file = syn::parse_file(code).unwrap_or_else(|err| panic!("{file_name} does not parse: {err}"));
  file.to_token_stream().to_string()
}

#[test]
fn test_petstore_output_matches_fixtures() {
  let output = Pipeline::standard(GenerationOptions::default())
    .with_source("fixtures/petstore.yaml")
    .run(&petstore_api(), ProcessorContext::new())
    .unwrap();

  assert_eq!(
    output.files().map(|(name, _)| name).collect::<Vec<_>>(),
    FIXTURES.iter().map(|(name, _)| *name).collect::<Vec<_>>()
  );
  for (file_name, expected) in FIXTURES {
    assert_eq!(
      tokens(file_name, &output.generated[file_name]),
      tokens(file_name, expected),
      "{file_name} differs from fixtures/petstore/{file_name}"
    );
  }
}

#[test]
fn test_default_response_keeps_plain_status_label() {
  let output = Pipeline::standard(GenerationOptions::default())
    .run(&petstore_api(), ProcessorContext::new())
    .unwrap();

  let types = &output.generated["types.rs"];
  assert!(types.contains("pub struct GetPetsPetIdDefaultResponse {"));
  assert!(!types.contains("DefaultTypeResponse"));
}
