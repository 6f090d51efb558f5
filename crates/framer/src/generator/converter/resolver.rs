//! Decorates schema trees with lookup-table matches and flattens them into
//! type definitions.

use indexmap::IndexMap;

use super::lookup::LookupTable;
use crate::{
  generator::{
    ast::{DefinitionKind, FieldType, Primitive, TypeDefinition},
    document::{AdditionalProperties, SchemaNode},
    errors::ResolveError,
  },
  naming::identifiers::{to_pascal_segment, to_rust_type_name},
  utils::{NodeClass, SchemaExt},
};

#[derive(Debug, Clone)]
pub struct Resolution {
  /// Decorated copy of the input node.
  pub node: SchemaNode,
  /// The root's own definition first, then nested definitions in property order.
  /// Duplicates are left for the registry to collapse.
  pub definitions: Vec<TypeDefinition>,
  /// Decorated source node of every struct definition, keyed by struct name.
  pub sources: IndexMap<String, SchemaNode>,
}

/// Resolves `node` under the type name `name`.
///
/// Fails fast on the first array without `items`, object without `properties`
/// or leftover `$ref`; no partial output is produced.
pub fn resolve(name: &str, node: &SchemaNode, lookup: &LookupTable) -> Result<Resolution, ResolveError> {
  let decorated = decorate(node, lookup, name)?;

  let mut flattener = Flattener::new(lookup);
  flattener.flatten(name, &decorated, name, NameOrigin::Given)?;

  Ok(Resolution {
    node: decorated,
    definitions: flattener.definitions,
    sources: flattener.sources,
  })
}

/// Returns a copy of `node` in which every object or collection whose signature
/// is registered carries the matching `resolved_name`. Children are decorated
/// before their parent.
pub fn decorate(node: &SchemaNode, lookup: &LookupTable, path: &str) -> Result<SchemaNode, ResolveError> {
  if let Some(reference) = &node.reference {
    return Err(ResolveError::UnresolvedReference {
      path: path.to_string(),
      reference: reference.clone(),
    });
  }

  let mut decorated = node.clone();

  if let Some(properties) = &node.properties {
    let mut children = IndexMap::with_capacity(properties.len());
    for (property, child) in properties {
      children.insert(property.clone(), decorate(child, lookup, &format!("{path}.{property}"))?);
    }
    decorated.properties = Some(children);
  }

  if let Some(items) = &node.items {
    decorated.items = Some(Box::new(decorate(items, lookup, &format!("{path}.items"))?));
  }

  if let Some(value) = node.map_value() {
    let value = decorate(value, lookup, &format!("{path}.additionalProperties"))?;
    decorated.additional_properties = Some(AdditionalProperties::Schema(Box::new(value)));
  }

  decorated.resolved_name = if decorated.is_object() || decorated.is_collection() {
    lookup.lookup(&decorated)?.map(String::from)
  } else {
    None
  };

  Ok(decorated)
}

/// Computes the field type of a decorated node.
///
/// `base` is the name candidate for an unmatched object at this position; items
/// and map values derive `{base}Item` and `{base}Value` from it. Candidates taken
/// by a named schema are numbered (see [`LookupTable::unclaimed_name`]).
/// `required` only matters for arrays, where it selects the non-empty form.
pub fn field_type(
  node: &SchemaNode,
  base: &str,
  required: bool,
  path: &str,
  lookup: &LookupTable,
) -> Result<FieldType, ResolveError> {
  match node.classify() {
    NodeClass::Reference => Err(ResolveError::UnresolvedReference {
      path: path.to_string(),
      reference: node.reference.clone().unwrap_or_default(),
    }),
    NodeClass::Array => {
      let items = node.items.as_deref().ok_or_else(|| ResolveError::MissingItems {
        path: path.to_string(),
      })?;
      let item = field_type(items, &format!("{base}Item"), false, &format!("{path}.items"), lookup)?;
      Ok(FieldType::list(item, required))
    }
    NodeClass::Object => {
      if node.properties.is_some() {
        let name = node
          .resolved_name
          .clone()
          .unwrap_or_else(|| lookup.unclaimed_name(base));
        Ok(FieldType::Named(name))
      } else if let Some(value) = node.map_value() {
        let value = field_type(
          value,
          &format!("{base}Value"),
          false,
          &format!("{path}.additionalProperties"),
          lookup,
        )?;
        Ok(FieldType::map(value))
      } else if node.allows_any_properties() {
        Ok(FieldType::map(FieldType::Primitive(Primitive::Json)))
      } else {
        Err(ResolveError::MissingProperties { path: path.to_string() })
      }
    }
    NodeClass::Primitive => Ok(FieldType::Primitive(node.primitive_type())),
  }
}

/// `{Struct}{Property}`: the name candidate of an unmatched object nested under a property.
pub fn nested_name(struct_name: &str, property: &str) -> String {
  format!("{struct_name}{}", to_pascal_segment(property))
}

/// `{Property}Enum`: the name of an enum synthesized from an inline string enum.
pub fn enum_name(property: &str) -> String {
  to_rust_type_name(&format!("{}Enum", to_pascal_segment(property)))
}

/// Where the name handed to [`Flattener::flatten`] comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameOrigin {
  /// Chosen by the caller of [`resolve`]; used as-is.
  Given,
  /// Derived from a parent; numbered when a named schema already uses it.
  Synthesized,
}

struct Flattener<'a> {
  lookup: &'a LookupTable,
  definitions: Vec<TypeDefinition>,
  sources: IndexMap<String, SchemaNode>,
}

impl<'a> Flattener<'a> {
  fn new(lookup: &'a LookupTable) -> Self {
    Self {
      lookup,
      definitions: Vec::new(),
      sources: IndexMap::new(),
    }
  }

  fn flatten(&mut self, name: &str, node: &SchemaNode, path: &str, origin: NameOrigin) -> Result<(), ResolveError> {
    if !node.contains_nested_schemas() {
      return self.flatten_primitive(name, node, path);
    }

    if node.is_collection() {
      let Some(items) = node.items.as_deref() else {
        return Err(ResolveError::MissingItems { path: path.to_string() });
      };
      let item_name = items.resolved_name.clone().unwrap_or_else(|| format!("{name}Item"));
      return self.flatten(&item_name, items, &format!("{path}.items"), NameOrigin::Synthesized);
    }

    if let Some(properties) = &node.properties {
      return self.flatten_struct(name, node, properties, path, origin);
    }

    if let Some(value) = node.map_value() {
      if !value.contains_nested_schemas() {
        return Ok(());
      }
      let value_name = value.resolved_name.clone().unwrap_or_else(|| format!("{name}Value"));
      return self.flatten(
        &value_name,
        value,
        &format!("{path}.additionalProperties"),
        NameOrigin::Synthesized,
      );
    }

    if node.allows_any_properties() {
      return Ok(());
    }

    Err(ResolveError::MissingProperties { path: path.to_string() })
  }

  fn flatten_primitive(&mut self, name: &str, node: &SchemaNode, path: &str) -> Result<(), ResolveError> {
    let kind = if node.is_string_enum() {
      DefinitionKind::Enum {
        values: node.enum_literals(),
        owner: None,
      }
    } else {
      DefinitionKind::Alias {
        target: field_type(node, name, false, path, self.lookup)?,
      }
    };
    self
      .definitions
      .push(TypeDefinition::new(name, kind).with_docs(node.description.clone()));
    Ok(())
  }

  fn flatten_struct(
    &mut self,
    name: &str,
    node: &SchemaNode,
    properties: &IndexMap<String, SchemaNode>,
    path: &str,
    origin: NameOrigin,
  ) -> Result<(), ResolveError> {
    let struct_name = match (&node.resolved_name, origin) {
      (Some(resolved), _) => resolved.clone(),
      (None, NameOrigin::Given) => name.to_string(),
      (None, NameOrigin::Synthesized) => self.lookup.unclaimed_name(name),
    };

    let mut fields = IndexMap::with_capacity(properties.len());
    for (property, child) in properties {
      let field = if child.is_string_enum() {
        FieldType::Named(enum_name(property))
      } else {
        field_type(
          child,
          &nested_name(&struct_name, property),
          node.is_required(property),
          &format!("{path}.{property}"),
          self.lookup,
        )?
      };
      fields.insert(property.clone(), field);
    }

    let required = properties
      .keys()
      .filter(|property| node.is_required(property))
      .cloned()
      .collect();

    self.definitions.push(
      TypeDefinition::new(&struct_name, DefinitionKind::Struct { fields, required })
        .with_docs(node.description.clone()),
    );
    self.sources.entry(struct_name.clone()).or_insert_with(|| node.clone());

    for (property, child) in properties {
      if child.is_string_enum() {
        let kind = DefinitionKind::Enum {
          values: child.enum_literals(),
          owner: Some(struct_name.clone()),
        };
        self
          .definitions
          .push(TypeDefinition::new(enum_name(property), kind).with_docs(child.description.clone()));
      } else if child.contains_nested_schemas() {
        self.flatten(
          &nested_name(&struct_name, property),
          child,
          &format!("{path}.{property}"),
          NameOrigin::Synthesized,
        )?;
      }
    }

    Ok(())
  }
}
