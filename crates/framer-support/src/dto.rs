use serde::Serialize;

/// Implemented by every generated data transfer object.
pub trait Dto: Serialize {
  /// The generated type this DTO wraps.
  type Model;

  /// Wire names of the wrapped type's properties, in declaration order.
  const PROPERTIES: &'static [&'static str];

  fn model(&self) -> &Self::Model;

  fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::to_value(self)
  }
}
