use std::collections::BTreeSet;

use crate::naming::identifiers::{
  ensure_unique, sanitize, to_pascal_segment, to_rust_field_name, to_rust_type_name, to_snake_stem, unraw,
};

#[test]
fn test_field_names() {
  assert_eq!(to_rust_field_name("foo-bar"), "foo_bar");
  assert_eq!(to_rust_field_name("photoUrls"), "photo_urls");
  assert_eq!(to_rust_field_name("match"), "r#match");
  assert_eq!(to_rust_field_name("type"), "r#type");
  assert_eq!(to_rust_field_name("123name"), "_123name");
  assert_eq!(to_rust_field_name(""), "_");
  assert_eq!(to_rust_field_name("  "), "_");
}

#[test]
fn test_field_names_that_cannot_be_raw() {
  assert_eq!(to_rust_field_name("self"), "self_");
  assert_eq!(to_rust_field_name("crate"), "crate_");
  assert_eq!(to_rust_field_name("super"), "super_");
}

#[test]
fn test_field_names_negative_prefix() {
  assert_eq!(to_rust_field_name("-created-date"), "negative_created_date");
  assert_eq!(to_rust_field_name("-id"), "negative_id");
  assert_eq!(to_rust_field_name("-"), "_");
}

#[test]
fn test_type_names() {
  assert_eq!(to_rust_type_name("pet"), "Pet");
  assert_eq!(to_rust_type_name("oAuth"), "OAuth");
  assert_eq!(to_rust_type_name("-INF"), "NegativeInf");
  assert_eq!(to_rust_type_name("123Response"), "T123Response");
  assert_eq!(to_rust_type_name(""), "Unnamed");
  assert_eq!(to_rust_type_name("  "), "Unnamed");
}

#[test]
fn test_type_names_from_operation_parts() {
  assert_eq!(to_rust_type_name("listPets"), "ListPets");
  assert_eq!(to_rust_type_name("get_pets_petId"), "GetPetsPetId");
  assert_eq!(to_rust_type_name("create-pet"), "CreatePet");
  assert_eq!(to_rust_type_name("pet.status"), "PetStatus");
}

#[test]
fn test_type_names_preserve_pascal_case() {
  assert_eq!(to_rust_type_name("XMLHttpRequest"), "XMLHttpRequest");
  assert_eq!(to_rust_type_name("IOError"), "IOError");
  assert_eq!(to_rust_type_name("xmlHttpRequest"), "XmlHttpRequest");
  assert_eq!(to_rust_type_name("beta_response_mcp_tool"), "BetaResponseMcpTool");
  assert_eq!(to_rust_type_name("Beta-Response-MCP"), "BetaResponseMcp");
}

#[test]
fn test_type_names_normalize_separated_uppercase() {
  assert_eq!(to_rust_type_name("NOT_FORCED"), "NotForced");
  assert_eq!(to_rust_type_name("ADD"), "Add");
  assert_eq!(to_rust_type_name("HTTP_URL"), "HttpUrl");
}

#[test]
fn test_type_name_reserved_pascal() {
  assert_eq!(to_rust_type_name("clone"), "CloneType");
  assert_eq!(to_rust_type_name("Vec"), "VecType");
  assert_eq!(to_rust_type_name("option"), "OptionType");
  assert_eq!(to_rust_type_name("Self"), "SelfType");
}

#[test]
fn test_pascal_segments_skip_reserved_suffix() {
  assert_eq!(to_pascal_segment("default"), "Default");
  assert_eq!(to_pascal_segment("option"), "Option");
  assert_eq!(to_pascal_segment("photo_urls"), "PhotoUrls");
  assert_eq!(to_pascal_segment("1st"), "1st");
  assert_eq!(to_pascal_segment("-id"), "NegativeId");
  assert_eq!(to_pascal_segment("--"), "Unnamed");
  assert_eq!(to_rust_type_name("default"), "DefaultType");
}

#[test]
fn test_sanitize() {
  assert_eq!(sanitize("foo--bar"), "foo_bar");
  assert_eq!(sanitize("__leading"), "leading");
  assert_eq!(sanitize("café"), "cafe");
  assert_eq!(sanitize(""), "");
}

#[test]
fn test_ensure_unique() {
  let used: BTreeSet<String> = ["StatusEnum", "StatusEnum2"].into_iter().map(String::from).collect();
  assert_eq!(ensure_unique("StatusEnum", &used), "StatusEnum3");
  assert_eq!(ensure_unique("KindEnum", &used), "KindEnum");
}

#[test]
fn test_snake_stem() {
  assert_eq!(to_snake_stem("Pet"), "pet");
  assert_eq!(to_snake_stem("PetCategory"), "pet_category");
}

#[test]
fn test_unraw() {
  assert_eq!(unraw("r#type"), "type");
  assert_eq!(unraw("name"), "name");
}
