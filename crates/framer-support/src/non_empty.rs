use std::ops::Index;

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("expected at least one element, found an empty sequence")]
pub struct EmptyVecError;

/// A sequence that always holds at least one element.
///
/// Serializes exactly like a `Vec<T>`. Deserializing an empty JSON array fails,
/// so a required array property can never silently arrive empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NonEmptyVec<T>(Vec<T>);

impl<T> NonEmptyVec<T> {
  pub fn new(head: T, tail: Vec<T>) -> Self {
    let mut items = Vec::with_capacity(tail.len() + 1);
    items.push(head);
    items.extend(tail);
    Self(items)
  }

  pub fn singleton(head: T) -> Self {
    Self(vec![head])
  }

  pub fn first(&self) -> &T {
    &self.0[0]
  }

  #[allow(clippy::len_without_is_empty)]
  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn push(&mut self, value: T) {
    self.0.push(value);
  }

  pub fn iter(&self) -> std::slice::Iter<'_, T> {
    self.0.iter()
  }

  pub fn as_slice(&self) -> &[T] {
    &self.0
  }

  pub fn into_vec(self) -> Vec<T> {
    self.0
  }
}

impl<T> TryFrom<Vec<T>> for NonEmptyVec<T> {
  type Error = EmptyVecError;

  fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
    if items.is_empty() {
      return Err(EmptyVecError);
    }
    Ok(Self(items))
  }
}

impl<T> From<NonEmptyVec<T>> for Vec<T> {
  fn from(value: NonEmptyVec<T>) -> Self {
    value.0
  }
}

impl<T> Index<usize> for NonEmptyVec<T> {
  type Output = T;

  fn index(&self, index: usize) -> &Self::Output {
    &self.0[index]
  }
}

impl<'a, T> IntoIterator for &'a NonEmptyVec<T> {
  type Item = &'a T;
  type IntoIter = std::slice::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.iter()
  }
}

impl<T> IntoIterator for NonEmptyVec<T> {
  type Item = T;
  type IntoIter = std::vec::IntoIter<T>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

impl<'de, T> Deserialize<'de> for NonEmptyVec<T>
where
  T: Deserialize<'de>,
{
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let items = Vec::<T>::deserialize(deserializer)?;
    Self::try_from(items).map_err(D::Error::custom)
  }
}
