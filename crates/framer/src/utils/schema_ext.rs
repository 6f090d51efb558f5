use crate::generator::{
  ast::Primitive,
  document::{SchemaNode, SchemaType},
};

/// Coarse shape of a schema node as seen by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeClass {
  Primitive,
  Object,
  Array,
  Reference,
}

/// Extension methods for `SchemaNode` to query its shape conveniently.
pub(crate) trait SchemaExt {
  /// The first non-null declared type, if any.
  fn primary_type(&self) -> Option<SchemaType>;

  /// Classifies the node. A leftover `$ref` wins over everything else, and a
  /// node without a declared type is primitive.
  fn classify(&self) -> NodeClass;

  /// Returns true if the node is neither an object nor an array.
  fn is_primitive(&self) -> bool {
    self.classify() == NodeClass::Primitive
  }

  fn is_object(&self) -> bool {
    self.classify() == NodeClass::Object
  }

  fn is_array(&self) -> bool {
    self.classify() == NodeClass::Array
  }

  /// Returns true for an array whose items exist and are not primitive.
  fn is_collection(&self) -> bool;

  /// Returns true for an object without properties whose values are described by
  /// `additionalProperties`.
  fn is_map(&self) -> bool;

  /// Returns true for any object, and for arrays with non-primitive items.
  fn contains_nested_schemas(&self) -> bool;

  /// Returns true for a string node with at least one enum literal.
  fn is_string_enum(&self) -> bool;

  /// Maps the declared type onto a primitive; anything unrecognized is text.
  fn primitive_type(&self) -> Primitive;
}

impl SchemaExt for SchemaNode {
  fn primary_type(&self) -> Option<SchemaType> {
    self.schema_type.as_ref().and_then(|types| types.primary())
  }

  fn classify(&self) -> NodeClass {
    if self.reference.is_some() {
      return NodeClass::Reference;
    }
    match self.primary_type() {
      Some(SchemaType::Object) => NodeClass::Object,
      Some(SchemaType::Array) => NodeClass::Array,
      _ => NodeClass::Primitive,
    }
  }

  fn is_collection(&self) -> bool {
    self.is_array() && self.items.as_deref().is_some_and(|items| !items.is_primitive())
  }

  fn is_map(&self) -> bool {
    self.is_object()
      && self.properties.is_none()
      && (self.map_value().is_some() || self.allows_any_properties())
  }

  fn contains_nested_schemas(&self) -> bool {
    match self.classify() {
      NodeClass::Object => true,
      NodeClass::Array => self.is_collection(),
      NodeClass::Primitive | NodeClass::Reference => false,
    }
  }

  fn is_string_enum(&self) -> bool {
    self.primary_type() == Some(SchemaType::String) && !self.enum_literals().is_empty()
  }

  fn primitive_type(&self) -> Primitive {
    match self.primary_type() {
      Some(SchemaType::Integer) => Primitive::Integer,
      Some(SchemaType::Number) => Primitive::Number,
      Some(SchemaType::Boolean) => Primitive::Boolean,
      _ => Primitive::Text,
    }
  }
}
