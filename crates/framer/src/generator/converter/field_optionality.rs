use crate::generator::ast::FieldType;

/// How a struct field is declared and (de)serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOptionality {
  /// Required, not an array: `T`.
  Required,
  /// Required array: `NonEmptyVec<T>`.
  NonEmpty,
  /// Optional array: `Vec<T>`, defaulting to empty.
  Sequence,
  /// Optional non-primitive: `Option<T>`, serialized as `null` when absent.
  Nullable,
  /// Optional primitive: `Option<T>`, omitted when absent.
  Omittable,
}

impl FieldOptionality {
  pub fn is_optional(self) -> bool {
    matches!(self, Self::Nullable | Self::Omittable)
  }
}

/// Policy for choosing a field's [`FieldOptionality`].
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct FieldOptionalityPolicy;

impl FieldOptionalityPolicy {
  pub fn standard() -> Self {
    Self
  }

  pub fn classify(self, field_type: &FieldType, is_required: bool) -> FieldOptionality {
    match (field_type, is_required) {
      (FieldType::List { non_empty: true, .. }, _) => FieldOptionality::NonEmpty,
      (FieldType::List { .. }, false) => FieldOptionality::Sequence,
      (_, true) => FieldOptionality::Required,
      (field_type, false) if field_type.is_primitive() => FieldOptionality::Omittable,
      (_, false) => FieldOptionality::Nullable,
    }
  }
}
