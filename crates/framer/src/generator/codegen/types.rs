use std::collections::BTreeSet;

use proc_macro2::TokenStream;
use quote::quote;

use super::{StructField, Visibility, doc_attrs, field_type_tokens, struct_fields, type_ident};
use crate::{
  generator::{
    ast::{DefinitionKind, FieldType, TypeDefinition},
    converter::{FieldOptionality, TypeDefinitions},
  },
  naming::identifiers::{ensure_unique, to_rust_type_name},
};

/// Renders every definition of the registry, in registry order.
pub(crate) fn generate_types(definitions: &TypeDefinitions, visibility: Visibility) -> TokenStream {
  let declarations = definitions
    .iter()
    .map(|definition| generate_definition(definition, visibility));

  quote! {
    use serde::{Deserialize, Serialize};

    pub use framer_support::NonEmptyVec;

    #(#declarations)*
  }
}

pub(crate) fn generate_definition(definition: &TypeDefinition, visibility: Visibility) -> TokenStream {
  match &definition.kind {
    DefinitionKind::Struct { .. } => generate_struct(definition, visibility),
    DefinitionKind::Enum { values, .. } => generate_enum(definition, values, visibility),
    DefinitionKind::Alias { target } => generate_type_alias(definition, target, visibility),
  }
}

fn generate_struct(definition: &TypeDefinition, visibility: Visibility) -> TokenStream {
  let name = type_ident(&definition.name);
  let docs = doc_attrs(definition.docs.as_deref());
  let vis = visibility.to_tokens();

  let fields = struct_fields(definition).into_iter().map(|field| {
    let ident = field.ident();
    let ty = field.declared_type(None);
    let serde_attrs = serde_field_attrs(&field);
    quote! {
      #serde_attrs
      #vis #ident: #ty
    }
  });

  quote! {
    #docs
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #vis struct #name {
      #(#fields),*
    }
  }
}

/// `#[serde(...)]` for one field: the wire rename plus the optionality attributes.
pub(crate) fn serde_field_attrs(field: &StructField<'_>) -> TokenStream {
  let mut parts = vec![];

  if field.needs_rename() {
    let wire_name = field.wire_name;
    parts.push(quote! { rename = #wire_name });
  }

  match field.optionality {
    FieldOptionality::Required | FieldOptionality::NonEmpty => {}
    FieldOptionality::Sequence | FieldOptionality::Nullable => parts.push(quote! { default }),
    FieldOptionality::Omittable => {
      parts.push(quote! { default });
      parts.push(quote! { skip_serializing_if = "Option::is_none" });
    }
  }

  if parts.is_empty() {
    quote! {}
  } else {
    quote! { #[serde(#(#parts),*)] }
  }
}

/// PascalCase variant names for enum literals, made unique in literal order.
pub(crate) fn variant_names(values: &[String]) -> Vec<String> {
  let mut used = BTreeSet::new();
  values
    .iter()
    .map(|value| {
      let name = ensure_unique(&to_rust_type_name(value), &used);
      used.insert(name.clone());
      name
    })
    .collect()
}

fn generate_enum(definition: &TypeDefinition, values: &[String], visibility: Visibility) -> TokenStream {
  let name = type_ident(&definition.name);
  let docs = doc_attrs(definition.docs.as_deref());
  let vis = visibility.to_tokens();

  let variants: Vec<_> = variant_names(values).iter().map(|variant| type_ident(variant)).collect();

  let declarations = variants.iter().zip(values).map(|(variant, value)| {
    quote! {
      #[serde(rename = #value)]
      #variant
    }
  });
  let arms = variants.iter().zip(values).map(|(variant, value)| {
    quote! { Self::#variant => #value }
  });

  quote! {
    #docs
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #vis enum #name {
      #(#declarations),*
    }

    impl #name {
      #vis const VARIANTS: &'static [Self] = &[#(Self::#variants),*];

      #vis fn as_str(self) -> &'static str {
        match self {
          #(#arms),*
        }
      }
    }

    impl std::fmt::Display for #name {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
      }
    }
  }
}

fn generate_type_alias(definition: &TypeDefinition, target: &FieldType, visibility: Visibility) -> TokenStream {
  let name = type_ident(&definition.name);
  let docs = doc_attrs(definition.docs.as_deref());
  let vis = visibility.to_tokens();
  let target = field_type_tokens(target, None);

  quote! {
    #docs
    #vis type #name = #target;
  }
}
