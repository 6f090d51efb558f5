//! The dereferenced API description the generator works on.
//!
//! Only the parts of an OpenAPI 3.x document that feed type generation are
//! modelled. Unknown keys are ignored when decoding.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use strum::{Display, EnumIter, IntoEnumIterator};

pub const JSON_MEDIA_TYPE: &str = "application/json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiDescription {
  pub info: Info,
  #[serde(default)]
  pub paths: IndexMap<String, PathItem>,
  #[serde(default)]
  pub components: Components,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Info {
  pub title: String,
  pub version: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Components {
  /// Named schemas in document declaration order.
  #[serde(default)]
  pub schemas: IndexMap<String, SchemaNode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Method {
  Get,
  Put,
  Post,
  Delete,
  Options,
  Head,
  Patch,
  Trace,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub get: Option<Operation>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub put: Option<Operation>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub post: Option<Operation>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub delete: Option<Operation>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub options: Option<Operation>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub head: Option<Operation>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub patch: Option<Operation>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub trace: Option<Operation>,
}

impl PathItem {
  pub fn operation(&self, method: Method) -> Option<&Operation> {
    match method {
      Method::Get => self.get.as_ref(),
      Method::Put => self.put.as_ref(),
      Method::Post => self.post.as_ref(),
      Method::Delete => self.delete.as_ref(),
      Method::Options => self.options.as_ref(),
      Method::Head => self.head.as_ref(),
      Method::Patch => self.patch.as_ref(),
      Method::Trace => self.trace.as_ref(),
    }
  }

  /// Declared operations in `get put post delete options head patch trace` order.
  pub fn operations(&self) -> impl Iterator<Item = (Method, &Operation)> {
    Method::iter().filter_map(|method| self.operation(method).map(|operation| (method, operation)))
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub operation_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub request_body: Option<Body>,
  #[serde(default)]
  pub responses: IndexMap<String, Body>,
}

/// A request body or response; both carry content keyed by media type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default)]
  pub content: IndexMap<String, MediaType>,
}

impl Body {
  /// The schema of the `application/json` content, parameters such as `charset` ignored.
  pub fn json_schema(&self) -> Option<&SchemaNode> {
    self
      .content
      .iter()
      .find(|(media_type, _)| {
        media_type
          .split(';')
          .next()
          .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(JSON_MEDIA_TYPE))
      })
      .and_then(|(_, media)| media.schema.as_ref())
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub schema: Option<SchemaNode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SchemaType {
  String,
  Integer,
  Number,
  Boolean,
  Object,
  Array,
  Null,
}

/// A single `type` or an OpenAPI 3.1 type list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSet {
  Single(SchemaType),
  Multiple(Vec<SchemaType>),
}

impl TypeSet {
  /// The first non-null member of the set.
  pub fn primary(&self) -> Option<SchemaType> {
    match self {
      Self::Single(SchemaType::Null) => None,
      Self::Single(schema_type) => Some(*schema_type),
      Self::Multiple(types) => types.iter().copied().find(|t| *t != SchemaType::Null),
    }
  }
}

/// `exclusiveMinimum`/`exclusiveMaximum`: a flag in OpenAPI 3.0, the bound itself in 3.1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExclusiveBound {
  Flag(bool),
  Value(Number),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
  Flag(bool),
  Schema(Box<SchemaNode>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaNode {
  #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
  pub schema_type: Option<TypeSet>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub format: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub properties: Option<IndexMap<String, SchemaNode>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub items: Option<Box<SchemaNode>>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub required: Vec<String>,
  #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
  pub enum_values: Option<Vec<Value>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub minimum: Option<Number>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub maximum: Option<Number>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub exclusive_minimum: Option<ExclusiveBound>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub exclusive_maximum: Option<ExclusiveBound>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub multiple_of: Option<Number>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub additional_properties: Option<AdditionalProperties>,
  #[serde(rename = "x-faker", default, skip_serializing_if = "Option::is_none")]
  pub faker: Option<String>,
  #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
  pub reference: Option<String>,
  /// Name of the top-level schema this node structurally matches.
  #[serde(skip)]
  pub resolved_name: Option<String>,
}

impl SchemaNode {
  pub fn is_required(&self, property: &str) -> bool {
    self.required.iter().any(|name| name == property)
  }

  /// String literals of the `enum` keyword; `null` members are dropped.
  pub fn enum_literals(&self) -> Vec<String> {
    self
      .enum_values
      .iter()
      .flatten()
      .filter_map(|value| match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
      })
      .collect()
  }

  /// The schema of `additionalProperties` when it is given as a schema.
  pub fn map_value(&self) -> Option<&SchemaNode> {
    match &self.additional_properties {
      Some(AdditionalProperties::Schema(value)) => Some(value),
      _ => None,
    }
  }

  pub fn allows_any_properties(&self) -> bool {
    matches!(self.additional_properties, Some(AdditionalProperties::Flag(true)))
  }
}
