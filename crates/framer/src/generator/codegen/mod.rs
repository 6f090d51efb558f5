use std::collections::BTreeSet;

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use super::{
  ast::{DefinitionKind, FieldType, Primitive, TypeDefinition},
  converter::{FieldOptionality, FieldOptionalityPolicy},
  errors::PipelineError,
};
use crate::naming::identifiers::{ensure_unique, to_rust_field_name, to_snake_stem, unraw};

pub mod dtos;
pub mod mocks;
pub mod types;

#[cfg(test)]
mod tests;

/// Module names of the generated files, as seen from sibling modules.
pub(crate) const TYPES_MODULE: &str = "types";
pub(crate) const DTO_MODULE: &str = "dto";
pub(crate) const MOCKER_MODULE: &str = "dto_mocker";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
  #[default]
  Public,
  Crate,
  File,
}

impl Visibility {
  pub fn parse(s: &str) -> Option<Self> {
    match s {
      "public" => Some(Visibility::Public),
      "crate" => Some(Visibility::Crate),
      "file" => Some(Visibility::File),
      _ => None,
    }
  }

  pub(crate) fn to_tokens(self) -> TokenStream {
    match self {
      Visibility::Public => quote! { pub },
      Visibility::Crate => quote! { pub(crate) },
      Visibility::File => quote! {},
    }
  }
}

/// Parses `tokens` as a Rust file and pretty-prints it.
pub(crate) fn format_file(file: &str, tokens: TokenStream) -> Result<String, PipelineError> {
  let syntax_tree = syn::parse2::<syn::File>(tokens).map_err(|source| PipelineError::Format {
    file: file.to_string(),
    source,
  })?;
  Ok(prettyplease::unparse(&syntax_tree))
}

pub(crate) fn type_ident(name: &str) -> Ident {
  format_ident!("{}", name)
}

pub(crate) fn module_ident(module: &str) -> Ident {
  format_ident!("{}", module)
}

pub(crate) fn factory_ident(type_name: &str) -> Ident {
  format_ident!("create_{}_factory", to_snake_stem(type_name))
}

pub(crate) fn factory_with_ident(type_name: &str) -> Ident {
  format_ident!("create_{}_factory_with", to_snake_stem(type_name))
}

pub(crate) fn dto_ident(type_name: &str) -> Ident {
  format_ident!("{}Dto", type_name)
}

pub(crate) fn doc_attrs(docs: Option<&str>) -> TokenStream {
  let Some(docs) = docs.map(str::trim).filter(|docs| !docs.is_empty()) else {
    return quote! {};
  };
  let lines = docs.lines().map(|line| format!(" {}", line.trim_end()));
  quote! { #(#[doc = #lines])* }
}

pub(crate) fn primitive_tokens(primitive: Primitive) -> TokenStream {
  match primitive {
    Primitive::Integer => quote! { i64 },
    Primitive::Number => quote! { f64 },
    Primitive::Boolean => quote! { bool },
    Primitive::Text => quote! { String },
    Primitive::Json => quote! { serde_json::Value },
  }
}

/// Renders a field type. Named types are qualified with `module` when given.
pub(crate) fn field_type_tokens(field_type: &FieldType, module: Option<&Ident>) -> TokenStream {
  match field_type {
    FieldType::Primitive(primitive) => primitive_tokens(*primitive),
    FieldType::Named(name) => {
      let ident = type_ident(name);
      match module {
        Some(module) => quote! { #module::#ident },
        None => quote! { #ident },
      }
    }
    FieldType::List { item, non_empty } => {
      let item = field_type_tokens(item, module);
      if *non_empty {
        quote! { NonEmptyVec<#item> }
      } else {
        quote! { Vec<#item> }
      }
    }
    FieldType::Map { value } => {
      let value = field_type_tokens(value, module);
      quote! { std::collections::HashMap<String, #value> }
    }
  }
}

/// A struct field as every generated file sees it.
#[derive(Debug, Clone)]
pub(crate) struct StructField<'a> {
  pub wire_name: &'a str,
  pub rust_name: String,
  pub field_type: &'a FieldType,
  pub optionality: FieldOptionality,
}

impl StructField<'_> {
  pub fn ident(&self) -> Ident {
    format_ident!("{}", self.rust_name)
  }

  pub fn setter_ident(&self) -> Ident {
    format_ident!("set_{}", unraw(&self.rust_name))
  }

  /// The declared type including the `Option` wrapper of optional fields.
  pub fn declared_type(&self, module: Option<&Ident>) -> TokenStream {
    let inner = field_type_tokens(self.field_type, module);
    if self.optionality.is_optional() {
      quote! { Option<#inner> }
    } else {
      inner
    }
  }

  pub fn needs_rename(&self) -> bool {
    unraw(&self.rust_name) != self.wire_name
  }
}

/// The fields of a struct definition in property order, with collision-free
/// Rust names. Empty for enums and aliases.
pub(crate) fn struct_fields(definition: &TypeDefinition) -> Vec<StructField<'_>> {
  let DefinitionKind::Struct { fields, .. } = &definition.kind else {
    return vec![];
  };

  let policy = FieldOptionalityPolicy::standard();
  let mut used = BTreeSet::new();

  fields
    .iter()
    .map(|(wire_name, field_type)| {
      let rust_name = ensure_unique(&to_rust_field_name(wire_name), &used);
      used.insert(rust_name.clone());
      StructField {
        wire_name,
        rust_name,
        field_type,
        optionality: policy.classify(field_type, definition.is_required(wire_name)),
      }
    })
    .collect()
}
