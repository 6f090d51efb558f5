//! Mock factory generation.
//!
//! Every struct with a DTO gets `create_{name}_factory()` and
//! `create_{name}_factory_with(overrides)`. Field values are chosen from the
//! field's type and the hints of its source schema (`format`, bounds,
//! `x-faker`).

use std::collections::HashMap;

use indexmap::IndexMap;
use proc_macro2::{Ident, Literal, TokenStream};
use quote::quote;
use serde_json::Number;

use super::{
  DTO_MODULE, StructField, TYPES_MODULE, Visibility, dto_ident, factory_ident, factory_with_ident, module_ident,
  struct_fields, type_ident,
};
use crate::{
  generator::{
    ast::{DefinitionKind, FieldType, Primitive, TypeDefinition},
    converter::TypeDefinitions,
    document::{ExclusiveBound, SchemaNode},
    errors::PipelineError,
  },
  naming::identifiers::to_rust_type_name,
};

const LIST_RANGE: (usize, usize) = (1, 10);
const MAP_RANGE: (usize, usize) = (1, 3);
const ID_RANGE: (i64, i64) = (100, 999);
const DEFAULT_MINIMUM: i64 = 1;
const MULTIPLE_SPAN: i64 = 1000;

/// Everything the factories are generated from.
pub(crate) struct MockSources<'a> {
  pub definitions: &'a TypeDefinitions,
  /// Decorated source node of every struct, keyed by struct name.
  pub sources: &'a IndexMap<String, SchemaNode>,
  /// Raw named schemas keyed by their type name, consulted for aliases.
  pub named: HashMap<String, &'a SchemaNode>,
}

impl<'a> MockSources<'a> {
  pub fn new(
    definitions: &'a TypeDefinitions,
    sources: &'a IndexMap<String, SchemaNode>,
    types: &'a IndexMap<String, SchemaNode>,
  ) -> Self {
    let named = types
      .iter()
      .map(|(name, node)| (to_rust_type_name(name), node))
      .collect();
    Self {
      definitions,
      sources,
      named,
    }
  }
}

/// Renders the factories of every struct named in `dtos`, in `dtos` order.
pub(crate) fn generate_mocks(
  mock_sources: &MockSources<'_>,
  dtos: &IndexMap<String, String>,
  visibility: Visibility,
) -> Result<TokenStream, PipelineError> {
  let factories = dtos
    .keys()
    .map(|name| {
      let definition = mock_sources.definitions.get(name).ok_or_else(|| PipelineError::UnknownType {
        type_name: name.clone(),
        name: name.clone(),
      })?;
      FactoryBuilder::new(mock_sources, definition).build(visibility)
    })
    .collect::<Result<Vec<_>, _>>()?;

  Ok(quote! {
    use framer_support::mock;

    use super::{dto, types};

    #(#factories)*
  })
}

/// Whether a property name designates an identifier.
pub(crate) fn is_id_like(name: &str) -> bool {
  matches!(name, "id" | "uuid" | "guid")
    || name.starts_with("id_")
    || name.ends_with("_id")
    || name
      .strip_prefix("id")
      .and_then(|rest| rest.chars().next())
      .is_some_and(|c| c.is_ascii_uppercase())
}

struct FactoryBuilder<'a> {
  sources: &'a MockSources<'a>,
  definition: &'a TypeDefinition,
  types_module: Ident,
  dto_module: Ident,
}

impl<'a> FactoryBuilder<'a> {
  fn new(sources: &'a MockSources<'a>, definition: &'a TypeDefinition) -> Self {
    Self {
      sources,
      definition,
      types_module: module_ident(TYPES_MODULE),
      dto_module: module_ident(DTO_MODULE),
    }
  }

  fn build(&self, visibility: Visibility) -> Result<TokenStream, PipelineError> {
    let vis = visibility.to_tokens();
    let name = &self.definition.name;
    let model = type_ident(name);
    let dto = dto_ident(name);
    let factory = factory_ident(name);
    let factory_with = factory_with_ident(name);
    let types_module = &self.types_module;
    let dto_module = &self.dto_module;

    let source = self.sources.sources.get(name);
    let fields = struct_fields(self.definition)
      .iter()
      .map(|field| {
        let ident = field.ident();
        let node = source
          .and_then(|source| source.properties.as_ref())
          .and_then(|properties| properties.get(field.wire_name));
        let value = self.field_value(field, node)?;
        Ok(quote! { #ident: #value })
      })
      .collect::<Result<Vec<_>, PipelineError>>()?;

    Ok(quote! {
      #vis fn #factory() -> #dto_module::#dto {
        #factory_with(|_| {})
      }

      #vis fn #factory_with(overrides: impl FnOnce(&mut #types_module::#model)) -> #dto_module::#dto {
        let mut model = #types_module::#model {
          #(#fields),*
        };
        overrides(&mut model);
        #dto_module::#dto::new(model)
      }
    })
  }

  fn field_value(&self, field: &StructField<'_>, node: Option<&SchemaNode>) -> Result<TokenStream, PipelineError> {
    let value = match field.field_type {
      FieldType::Primitive(primitive @ (Primitive::Integer | Primitive::Text)) if is_id_like(field.wire_name) => {
        id_value(*primitive)
      }
      field_type => self.value(field, field_type, node)?,
    };

    if field.optionality.is_optional() {
      Ok(quote! { Some(#value) })
    } else {
      Ok(value)
    }
  }

  fn value(
    &self,
    field: &StructField<'_>,
    field_type: &FieldType,
    node: Option<&SchemaNode>,
  ) -> Result<TokenStream, PipelineError> {
    let faker = node.and_then(|node| node.faker.as_deref());

    match (field_type, faker) {
      (FieldType::Named(name), _) => self.named_value(field, name),
      (_, Some(expression)) => self.faker_value(field, expression),
      (FieldType::List { item, non_empty }, None) => {
        let item = self.value(field, item, node.and_then(|node| node.items.as_deref()))?;
        let (min, max) = range_literals(LIST_RANGE);
        if *non_empty {
          Ok(quote! { mock::non_empty_vec(#min, #max, || #item) })
        } else {
          Ok(quote! { mock::vec(#min, #max, || #item) })
        }
      }
      (FieldType::Map { value }, None) => {
        let value = self.value(field, value, node.and_then(SchemaNode::map_value))?;
        let (min, max) = range_literals(MAP_RANGE);
        Ok(quote! { mock::map(#min, #max, || #value) })
      }
      (FieldType::Primitive(primitive), None) => Ok(primitive_value(*primitive, node)),
    }
  }

  fn named_value(&self, field: &StructField<'_>, name: &str) -> Result<TokenStream, PipelineError> {
    let definition = self
      .sources
      .definitions
      .get(name)
      .ok_or_else(|| PipelineError::UnknownType {
        type_name: self.definition.name.clone(),
        name: name.to_string(),
      })?;

    match &definition.kind {
      DefinitionKind::Struct { .. } => {
        let factory = factory_ident(name);
        Ok(quote! { #factory().into_inner() })
      }
      DefinitionKind::Enum { .. } => {
        let types_module = &self.types_module;
        let ident = type_ident(name);
        Ok(quote! { mock::pick(#types_module::#ident::VARIANTS) })
      }
      DefinitionKind::Alias { target } => self.value(field, target, self.sources.named.get(name).copied()),
    }
  }

  fn faker_value(&self, field: &StructField<'_>, expression: &str) -> Result<TokenStream, PipelineError> {
    let invalid = || PipelineError::InvalidMockExpression {
      type_name: self.definition.name.clone(),
      field: field.wire_name.to_string(),
      expression: expression.to_string(),
    };

    let trimmed = expression.trim();
    let qualified = trimmed.strip_prefix("mock::").unwrap_or(trimmed);
    match syn::parse_str::<syn::Expr>(&format!("mock::{qualified}")) {
      Ok(syn::Expr::Call(call)) => Ok(quote! { #call }),
      Ok(syn::Expr::MethodCall(call)) => Ok(quote! { #call }),
      _ => Err(invalid()),
    }
  }
}

fn id_value(primitive: Primitive) -> TokenStream {
  match primitive {
    Primitive::Integer => {
      let (min, max) = ID_RANGE;
      let (min, max) = (int_literal(min), int_literal(max));
      quote! { mock::int(#min, #max) }
    }
    _ => quote! { mock::uuid() },
  }
}

fn primitive_value(primitive: Primitive, node: Option<&SchemaNode>) -> TokenStream {
  match primitive {
    Primitive::Boolean => quote! { mock::boolean() },
    Primitive::Integer => integer_value(node),
    Primitive::Number => number_value(node),
    Primitive::Text => text_value(node.and_then(|node| node.format.as_deref())),
    Primitive::Json => quote! { mock::json() },
  }
}

/// A numeric bound read from `minimum`/`maximum` and their exclusive forms.
#[derive(Debug, Clone, Copy)]
struct Bound {
  value: f64,
  exclusive: bool,
}

impl Bound {
  fn read(inclusive: Option<&Number>, exclusive: Option<&ExclusiveBound>) -> Option<Self> {
    let inclusive = inclusive.and_then(Number::as_f64);
    match exclusive {
      Some(ExclusiveBound::Value(bound)) => bound.as_f64().map(|value| Self { value, exclusive: true }),
      Some(ExclusiveBound::Flag(exclusive)) => inclusive.map(|value| Self {
        value,
        exclusive: *exclusive,
      }),
      None => inclusive.map(|value| Self { value, exclusive: false }),
    }
  }

  /// Smallest integer the bound admits as a lower bound.
  #[allow(clippy::cast_possible_truncation)]
  fn int_min(self) -> i64 {
    if self.exclusive {
      (self.value.floor() as i64).saturating_add(1)
    } else {
      self.value.ceil() as i64
    }
  }

  /// Largest integer the bound admits as an upper bound.
  #[allow(clippy::cast_possible_truncation)]
  fn int_max(self) -> i64 {
    if self.exclusive {
      (self.value.ceil() as i64).saturating_sub(1)
    } else {
      self.value.floor() as i64
    }
  }

  fn float_min(self) -> f64 {
    if self.exclusive { self.value.next_up() } else { self.value }
  }

  fn float_max(self) -> f64 {
    if self.exclusive { self.value.next_down() } else { self.value }
  }
}

fn bounds(node: Option<&SchemaNode>) -> (Option<Bound>, Option<Bound>) {
  let Some(node) = node else {
    return (None, None);
  };
  (
    Bound::read(node.minimum.as_ref(), node.exclusive_minimum.as_ref()),
    Bound::read(node.maximum.as_ref(), node.exclusive_maximum.as_ref()),
  )
}

fn integer_value(node: Option<&SchemaNode>) -> TokenStream {
  let (minimum, maximum) = bounds(node);
  let min = minimum.map_or(DEFAULT_MINIMUM, Bound::int_min);
  let max = maximum.map(Bound::int_max);
  let multiple = node
    .and_then(|node| node.multiple_of.as_ref())
    .and_then(Number::as_i64)
    .filter(|multiple| *multiple > 0);

  match (max, multiple) {
    (max, Some(multiple)) => {
      let max = int_literal(max.unwrap_or_else(|| min.saturating_add(MULTIPLE_SPAN)));
      let (min, multiple) = (int_literal(min), int_literal(multiple));
      quote! { mock::int_multiple(#min, #max, #multiple) }
    }
    (Some(max), None) => {
      let (min, max) = (int_literal(min), int_literal(max));
      quote! { mock::int(#min, #max) }
    }
    (None, None) => {
      let min = int_literal(min);
      quote! { mock::int_from(#min) }
    }
  }
}

#[allow(clippy::cast_precision_loss)]
fn number_value(node: Option<&SchemaNode>) -> TokenStream {
  let (minimum, maximum) = bounds(node);
  let min = float_literal(minimum.map_or(DEFAULT_MINIMUM as f64, Bound::float_min));
  match maximum {
    Some(max) => {
      let max = float_literal(max.float_max());
      quote! { mock::float(#min, #max) }
    }
    None => quote! { mock::float_from(#min) },
  }
}

fn text_value(format: Option<&str>) -> TokenStream {
  match format {
    Some("email") => quote! { mock::email() },
    Some("uuid") => quote! { mock::uuid() },
    Some("uri" | "url" | "hostname") => quote! { mock::url() },
    Some("ip" | "ipv4") => quote! { mock::ipv4() },
    Some("ipv6") => quote! { mock::ipv6() },
    Some("token") => quote! { mock::jwt() },
    Some("date") => quote! { mock::date() },
    Some("date-time") => quote! { mock::date_time() },
    _ => quote! { mock::words(1, 3) },
  }
}

fn range_literals((min, max): (usize, usize)) -> (Literal, Literal) {
  (Literal::usize_unsuffixed(min), Literal::usize_unsuffixed(max))
}

fn int_literal(value: i64) -> TokenStream {
  let literal = Literal::u64_unsuffixed(value.unsigned_abs());
  if value < 0 {
    quote! { -#literal }
  } else {
    quote! { #literal }
  }
}

fn float_literal(value: f64) -> TokenStream {
  let literal = Literal::f64_unsuffixed(value.abs());
  if value < 0.0 {
    quote! { -#literal }
  } else {
    quote! { #literal }
  }
}
