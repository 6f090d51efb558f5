//! Random value builders called from generated mock factories.
//!
//! Every function draws from the thread-local generator, so factories produce a
//! fresh value on each call. Bounds are inclusive.

use std::collections::HashMap;

use chrono::{Duration, Utc};
use rand::{Rng, seq::SliceRandom};

use crate::NonEmptyVec;

/// Width of the range used when only a lower bound is known.
pub const DEFAULT_SPAN: i64 = 1000;

const WORDS: &[&str] = &[
  "alpha", "amber", "anchor", "arrow", "atlas", "birch", "blaze", "bloom", "cedar", "cinder", "cobalt", "comet",
  "coral", "delta", "ember", "fable", "fern", "flint", "gale", "harbor", "hazel", "indigo", "ivory", "juniper",
  "lagoon", "lumen", "maple", "meadow", "nimbus", "onyx", "orbit", "pebble", "prairie", "quartz", "raven", "ripple",
  "sable", "sierra", "spruce", "summit", "tango", "thistle", "tundra", "umber", "velvet", "willow", "zephyr",
];

const DOMAINS: &[&str] = &["example.com", "example.org", "example.net", "test.dev"];

pub fn int(min: i64, max: i64) -> i64 {
  if max <= min {
    return min;
  }
  rand::thread_rng().gen_range(min..=max)
}

pub fn int_from(min: i64) -> i64 {
  int(min, min.saturating_add(DEFAULT_SPAN))
}

/// A multiple of `multiple` within `min..=max`, falling back to `min` when the range holds none.
pub fn int_multiple(min: i64, max: i64, multiple: i64) -> i64 {
  if multiple <= 0 {
    return int(min, max);
  }
  let low = min.div_euclid(multiple) + i64::from(min.rem_euclid(multiple) != 0);
  let high = max.div_euclid(multiple);
  if high < low {
    return min;
  }
  int(low, high) * multiple
}

pub fn float(min: f64, max: f64) -> f64 {
  if max.partial_cmp(&min) != Some(std::cmp::Ordering::Greater) {
    return min;
  }
  rand::thread_rng().gen_range(min..=max)
}

pub fn float_from(min: f64) -> f64 {
  float(min, min + DEFAULT_SPAN as f64)
}

pub fn boolean() -> bool {
  rand::thread_rng().gen_bool(0.5)
}

/// Between `min` and `max` lowercase words separated by single spaces.
pub fn words(min: usize, max: usize) -> String {
  let mut rng = rand::thread_rng();
  (0..count(min, max).max(1))
    .filter_map(|_| WORDS.choose(&mut rng).copied())
    .collect::<Vec<_>>()
    .join(" ")
}

pub fn email() -> String {
  let mut rng = rand::thread_rng();
  let user = WORDS.choose(&mut rng).copied().unwrap_or("user");
  let domain = DOMAINS.choose(&mut rng).copied().unwrap_or("example.com");
  format!("{user}.{}@{domain}", rng.gen_range(1..=999))
}

pub fn uuid() -> String {
  uuid::Uuid::new_v4().to_string()
}

pub fn url() -> String {
  let mut rng = rand::thread_rng();
  let domain = DOMAINS.choose(&mut rng).copied().unwrap_or("example.com");
  let path = WORDS.choose(&mut rng).copied().unwrap_or("index");
  format!("https://{domain}/{path}")
}

pub fn ipv4() -> String {
  let mut rng = rand::thread_rng();
  let octets: [u8; 4] = rng.r#gen();
  std::net::Ipv4Addr::from(octets).to_string()
}

pub fn ipv6() -> String {
  let mut rng = rand::thread_rng();
  let segments: [u16; 8] = rng.r#gen();
  std::net::Ipv6Addr::from(segments).to_string()
}

/// An unsigned token shaped like a JWT: three base64url segments.
pub fn jwt() -> String {
  const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";
  let mut rng = rand::thread_rng();
  let mut segment = |len: usize| -> String {
    (0..len)
      .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
      .collect()
  };
  format!("{}.{}.{}", segment(36), segment(64), segment(43))
}

/// A calendar date within the last year, `YYYY-MM-DD`.
pub fn date() -> String {
  let days = rand::thread_rng().gen_range(0..=365);
  (Utc::now() - Duration::days(days)).format("%Y-%m-%d").to_string()
}

/// An RFC 3339 timestamp within the last year.
pub fn date_time() -> String {
  let seconds = rand::thread_rng().gen_range(0..=365 * 24 * 60 * 60);
  (Utc::now() - Duration::seconds(seconds)).to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

/// A small free-form JSON object.
pub fn json() -> serde_json::Value {
  let mut object = serde_json::Map::new();
  object.insert(words(1, 1), serde_json::Value::String(words(1, 3)));
  serde_json::Value::Object(object)
}

/// One element of a non-empty slice, used for enum variants.
///
/// # Panics
///
/// Panics if `values` is empty.
pub fn pick<T: Copy>(values: &[T]) -> T {
  let index = rand::thread_rng().gen_range(0..values.len());
  values[index]
}

fn count(min: usize, max: usize) -> usize {
  if max <= min {
    min
  } else {
    rand::thread_rng().gen_range(min..=max)
  }
}

pub fn vec<T>(min: usize, max: usize, mut item: impl FnMut() -> T) -> Vec<T> {
  (0..count(min, max)).map(|_| item()).collect()
}

pub fn non_empty_vec<T>(min: usize, max: usize, mut item: impl FnMut() -> T) -> NonEmptyVec<T> {
  let head = item();
  let tail = vec(min.max(1) - 1, max.max(1) - 1, item);
  NonEmptyVec::new(head, tail)
}

/// A map keyed by distinct generated words.
pub fn map<T>(min: usize, max: usize, mut value: impl FnMut() -> T) -> HashMap<String, T> {
  (0..count(min, max))
    .map(|index| (format!("{}_{index}", words(1, 1)), value()))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_int_stays_within_bounds() {
    for _ in 0..200 {
      let value = int(100, 999);
      assert!((100..=999).contains(&value), "{value} out of range");
    }
    assert_eq!(int(5, 5), 5);
    assert_eq!(int(7, 3), 7);
  }

  #[test]
  fn test_int_multiple_respects_step() {
    for _ in 0..200 {
      let value = int_multiple(1, 100, 7);
      assert_eq!(value % 7, 0);
      assert!((7..=98).contains(&value));
    }
    assert_eq!(int_multiple(1, 3, 5), 1);
  }

  #[test]
  fn test_float_stays_within_bounds() {
    for _ in 0..200 {
      let value = float(1.5, 2.5);
      assert!((1.5..=2.5).contains(&value));
    }
  }

  #[test]
  fn test_words_count() {
    for _ in 0..50 {
      let text = words(1, 3);
      let count = text.split(' ').count();
      assert!((1..=3).contains(&count), "{text:?}");
    }
  }

  #[test]
  fn test_formatted_strings() {
    assert!(email().contains('@'));
    assert!(uuid::Uuid::parse_str(&uuid()).is_ok());
    assert!(url().starts_with("https://"));
    assert!(ipv4().parse::<std::net::Ipv4Addr>().is_ok());
    assert!(ipv6().parse::<std::net::Ipv6Addr>().is_ok());
    assert_eq!(jwt().split('.').count(), 3);
    assert!(chrono::NaiveDate::parse_from_str(&date(), "%Y-%m-%d").is_ok());
    assert!(chrono::DateTime::parse_from_rfc3339(&date_time()).is_ok());
  }

  #[test]
  fn test_pick_returns_member() {
    const VARIANTS: &[&str] = &["available", "pending", "sold"];
    for _ in 0..50 {
      assert!(VARIANTS.contains(&pick(VARIANTS)));
    }
  }

  #[test]
  fn test_collections_respect_sizes() {
    for _ in 0..50 {
      let items = vec(1, 10, || 1);
      assert!((1..=10).contains(&items.len()));

      let required = non_empty_vec(1, 10, boolean);
      assert!((1..=10).contains(&required.len()));

      let entries = map(1, 3, || 0_i64);
      assert!((1..=3).contains(&entries.len()));
    }
    assert!(vec(0, 0, || 1).is_empty());
  }
}
