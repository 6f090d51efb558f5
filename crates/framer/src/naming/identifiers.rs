use std::{
  char::{ToLowercase, ToUppercase},
  collections::{BTreeSet, HashSet},
  iter::Peekable,
  sync::LazyLock,
};

use any_ascii::any_ascii;
use inflections::Inflect;
use regex::Regex;

pub(crate) static FORBIDDEN_IDENTIFIERS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "as", "break", "const", "continue", "else", "enum", "extern", "false", "fn", "for", "if", "impl", "in", "let",
    "loop", "match", "mod", "move", "mut", "pub", "ref", "return", "static", "struct", "trait", "true", "type",
    "unsafe", "use", "where", "while", "async", "await", "dyn", "try", "abstract", "become", "box", "do", "final",
    "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "gen",
  ]
  .into_iter()
  .collect()
});

/// Keywords that cannot be written as raw identifiers.
static NON_RAW_IDENTIFIERS: LazyLock<HashSet<&str>> =
  LazyLock::new(|| ["self", "Self", "crate", "super"].into_iter().collect());

/// Names the generated files rely on from the prelude or as derive targets.
static RESERVED_PASCAL_CASE: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "Box", "Clone", "Copy", "Default", "Deserialize", "HashMap", "NonEmptyVec", "Option", "Result", "Self",
    "Serialize", "String", "Vec",
  ]
  .into_iter()
  .collect()
});

static INVALID_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());
static MULTI_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());

/// Transliterates to ASCII, replaces invalid characters with underscores, collapses
/// consecutive underscores, and trims any leading or trailing underscores.
pub(crate) fn sanitize(input: &str) -> String {
  if input.is_empty() {
    return String::new();
  }

  let ascii = any_ascii(input);
  let replaced = INVALID_CHARS_RE.replace_all(&ascii, "_");
  let collapsed = MULTI_UNDERSCORE_RE.replace_all(&replaced, "_");

  collapsed.trim_matches('_').to_string()
}

/// Appends the smallest numeric suffix (starting at 2) that makes `base_name` unused.
pub(crate) fn ensure_unique(base_name: &str, used_names: &BTreeSet<String>) -> String {
  if !used_names.contains(base_name) {
    return base_name.to_string();
  }
  let mut i = 2;
  loop {
    let new_name = format!("{base_name}{i}");
    if !used_names.contains(&new_name) {
      return new_name;
    }
    i += 1;
  }
}

/// Converts a property name into a valid Rust field name (`snake_case`).
///
/// # Rules:
/// 1. A leading `-` is stripped and `negative_` is prepended to the result.
/// 2. Sanitizes the base string and converts it to `snake_case`.
/// 3. `self`, `crate` and `super` get a trailing underscore.
/// 4. Other keywords get a raw identifier prefix (`r#`).
/// 5. A leading digit is prefixed with `_`; an empty result becomes `_`.
pub(crate) fn to_rust_field_name(name: &str) -> String {
  let (has_leading_minus, name_without_minus) = match name.strip_prefix('-') {
    Some(stripped) => (true, stripped),
    None => (false, name),
  };

  let mut ident = sanitize(name_without_minus).to_snake_case();

  if ident.is_empty() {
    return "_".to_string();
  }

  if has_leading_minus {
    ident = format!("negative_{ident}");
  }

  if NON_RAW_IDENTIFIERS.contains(ident.as_str()) {
    return format!("{ident}_");
  }

  if FORBIDDEN_IDENTIFIERS.contains(ident.as_str()) {
    return format!("r#{ident}");
  }

  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, '_');
  }

  ident
}

/// Converts a schema, operation or property name into a valid Rust type name (`PascalCase`).
///
/// # Rules:
/// 1. The name is converted by [`to_pascal_segment`].
/// 2. Names the generated code relies on (`Option`, `Vec`, ...) get a `Type` suffix.
/// 3. A leading digit is prefixed with `T`.
///
/// The result never carries a raw identifier prefix, so it can be concatenated
/// into derived names such as `{Struct}{Property}` or `{Name}Dto`.
pub(crate) fn to_rust_type_name(name: &str) -> String {
  let mut ident = to_pascal_segment(name);

  if RESERVED_PASCAL_CASE.contains(ident.as_str()) {
    ident.push_str("Type");
  }

  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, 'T');
  }

  ident
}

/// `PascalCase` form of a name that is only ever used as part of a longer
/// identifier, such as a status code or property inside `{Operation}{Status}Response`.
///
/// # Rules:
/// 1. A leading `-` is stripped and `Negative` is prepended to the result.
/// 2. Input already in mixed case without separators keeps its capitalization.
/// 3. Anything else is sanitized and converted word by word.
/// 4. An empty result becomes `Unnamed`.
pub(crate) fn to_pascal_segment(name: &str) -> String {
  let (has_leading_minus, name_without_minus) = match name.strip_prefix('-') {
    Some(stripped) => (true, stripped),
    None => (false, name),
  };

  let has_separators = name_without_minus.contains(['-', '_', '.', ' ', '/', '{', '}']);
  let has_upper = name_without_minus.chars().any(|c| c.is_ascii_uppercase());
  let has_lower = name_without_minus.chars().any(|c| c.is_ascii_lowercase());
  let appears_mixed_case = !has_separators && has_upper && has_lower;

  let ascii = any_ascii(name_without_minus);
  let ident: String = if appears_mixed_case {
    let cleaned: String = ascii.chars().filter(char::is_ascii_alphanumeric).collect();
    let mut chars = cleaned.chars();
    match chars.next() {
      None => String::new(),
      Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
  } else {
    ascii
      .chars()
      .capitalize_words_with_boundaries()
      .filter(char::is_ascii_alphanumeric)
      .collect()
  };

  if ident.is_empty() {
    return "Unnamed".to_string();
  }

  if has_leading_minus {
    format!("Negative{ident}")
  } else {
    ident
  }
}

/// Converts a generated type name into the `snake_case` stem used for function names.
pub(crate) fn to_snake_stem(type_name: &str) -> String {
  let stem = sanitize(type_name).to_snake_case();
  if stem.is_empty() { "unnamed".to_string() } else { stem }
}

/// Strips a raw identifier prefix so the name can be embedded in another identifier.
pub(crate) fn unraw(ident: &str) -> &str {
  ident.strip_prefix("r#").unwrap_or(ident)
}

/// An extension trait for char iterators to add word capitalization.
pub trait CapitalizeWordsExt: Iterator<Item = char> {
  fn capitalize_words_with_boundaries(self) -> CapitalizeWordsWithBoundaries<Self>
  where
    Self: Sized;
}

impl<I> CapitalizeWordsExt for I
where
  I: Iterator<Item = char>,
{
  fn capitalize_words_with_boundaries(self) -> CapitalizeWordsWithBoundaries<Self>
  where
    Self: Sized,
  {
    CapitalizeWordsWithBoundaries {
      iter: self.peekable(),
      capitalize_next: true,
      prev_was_lower: false,
      pending_upper: None,
      pending_lower: None,
    }
  }
}

pub struct CapitalizeWordsWithBoundaries<I>
where
  I: Iterator<Item = char>,
{
  iter: Peekable<I>,
  capitalize_next: bool,
  prev_was_lower: bool,
  pending_upper: Option<ToUppercase>,
  pending_lower: Option<ToLowercase>,
}

impl<I> Iterator for CapitalizeWordsWithBoundaries<I>
where
  I: Iterator<Item = char>,
{
  type Item = char;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    if let Some(upper_iter) = self.pending_upper.as_mut() {
      if let Some(c) = upper_iter.next() {
        return Some(c);
      }
      self.pending_upper = None;
    }

    if let Some(lower_iter) = self.pending_lower.as_mut() {
      if let Some(c) = lower_iter.next() {
        return Some(c);
      }
      self.pending_lower = None;
    }

    let c = self.iter.next()?;

    if !c.is_ascii_alphanumeric() {
      self.capitalize_next = self.iter.peek().is_some_and(char::is_ascii_alphanumeric);
      self.prev_was_lower = false;
      return Some(c);
    }

    let is_lower = c.is_ascii_lowercase();
    let is_upper = c.is_ascii_uppercase();

    let should_capitalize = self.capitalize_next
      || (self.prev_was_lower && is_upper)
      || (is_upper && self.iter.peek().is_some_and(char::is_ascii_lowercase));

    self.prev_was_lower = is_lower;
    self.capitalize_next = false;

    if should_capitalize {
      let mut upper = c.to_uppercase();
      let first = upper.next();
      self.pending_upper = Some(upper);
      first
    } else {
      let mut lower = c.to_lowercase();
      let first = lower.next();
      self.pending_lower = Some(lower);
      first
    }
  }
}
