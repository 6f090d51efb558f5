use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use super::{StructField, TYPES_MODULE, Visibility, doc_attrs, dto_ident, module_ident, struct_fields, type_ident};
use crate::{
  generator::{ast::TypeDefinition, converter::FieldOptionality},
  naming::identifiers::unraw,
};

/// Method names of the wrapper that a getter must not shadow.
const WRAPPER_METHODS: &[&str] = &["new", "into_inner", "map", "model", "to_json"];

/// Renders a DTO wrapper for every struct in `structs`.
pub(crate) fn generate_dtos<'a>(
  structs: impl IntoIterator<Item = &'a TypeDefinition>,
  visibility: Visibility,
) -> TokenStream {
  let types_module = module_ident(TYPES_MODULE);
  let wrappers = structs
    .into_iter()
    .map(|definition| generate_dto(definition, &types_module, visibility));

  quote! {
    use framer_support::NonEmptyVec;
    use serde::{Deserialize, Serialize};

    use super::types;

    #(#wrappers)*
  }
}

pub(crate) fn generate_dto(definition: &TypeDefinition, types_module: &Ident, visibility: Visibility) -> TokenStream {
  let vis = visibility.to_tokens();
  let model = type_ident(&definition.name);
  let name = dto_ident(&definition.name);
  let docs = doc_attrs(definition.docs.as_deref());
  let fields = struct_fields(definition);

  let properties = fields.iter().map(|field| field.wire_name);
  let copies = fields.iter().map(copy_statement);
  let accessors = fields.iter().map(|field| accessors(field, types_module, &vis));

  quote! {
    #docs
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(transparent)]
    #vis struct #name(#types_module::#model);

    impl #name {
      #vis fn new(model: #types_module::#model) -> Self {
        Self(model)
      }

      #vis fn into_inner(self) -> #types_module::#model {
        self.0
      }

      /// Copies every present value of `source` into this DTO.
      #vis fn map(&mut self, source: &#types_module::#model) -> &mut Self {
        #(#copies)*
        self
      }

      #(#accessors)*
    }

    impl From<#types_module::#model> for #name {
      fn from(model: #types_module::#model) -> Self {
        Self(model)
      }
    }

    impl From<#name> for #types_module::#model {
      fn from(dto: #name) -> Self {
        dto.0
      }
    }

    impl framer_support::Dto for #name {
      type Model = #types_module::#model;

      const PROPERTIES: &'static [&'static str] = &[#(#properties),*];

      fn model(&self) -> &Self::Model {
        &self.0
      }
    }
  }
}

/// The statement `map` uses for one field: absent optionals and empty optional
/// sequences leave the current value alone.
fn copy_statement(field: &StructField<'_>) -> TokenStream {
  let ident = field.ident();
  match field.optionality {
    FieldOptionality::Required | FieldOptionality::NonEmpty => quote! {
      self.0.#ident = source.#ident.clone();
    },
    FieldOptionality::Sequence => quote! {
      if !source.#ident.is_empty() {
        self.0.#ident = source.#ident.clone();
      }
    },
    FieldOptionality::Nullable | FieldOptionality::Omittable => quote! {
      if let Some(value) = &source.#ident {
        self.0.#ident = Some(value.clone());
      }
    },
  }
}

fn getter_ident(field: &StructField<'_>) -> Ident {
  let name = unraw(&field.rust_name);
  if WRAPPER_METHODS.contains(&name) {
    format_ident!("get_{}", name)
  } else {
    field.ident()
  }
}

fn accessors(field: &StructField<'_>, types_module: &Ident, vis: &TokenStream) -> TokenStream {
  let ident = field.ident();
  let getter = getter_ident(field);
  let setter = field.setter_ident();
  let ty = field.declared_type(Some(types_module));

  quote! {
    #vis fn #getter(&self) -> &#ty {
      &self.0.#ident
    }

    #vis fn #setter(&mut self, value: #ty) -> &mut Self {
      self.0.#ident = value;
      self
    }
  }
}
