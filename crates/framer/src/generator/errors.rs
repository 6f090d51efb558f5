use std::path::PathBuf;

use super::pipeline::ContextKey;

/// Failures of signature computation, resolution and registry merging.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
  #[error("schema `{path}` is an array without `items`")]
  MissingItems { path: String },
  #[error("schema `{path}` is an object with neither `properties` nor an `additionalProperties` schema")]
  MissingProperties { path: String },
  #[error("schema `{path}` still contains the reference `{reference}`")]
  UnresolvedReference { path: String, reference: String },
  #[error("type `{name}` is defined more than once with different shapes")]
  ConflictingDefinition { name: String },
  #[error("failed to canonicalize schema: {0}")]
  Signature(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
  #[error("stage `{stage}` requires the `{key}` context slot, which no earlier stage provided")]
  MissingContext { stage: String, key: ContextKey },
  #[error("context slot `{key}` was already provided by an earlier stage")]
  ContextKeyRedefined { key: ContextKey },
  #[error(transparent)]
  Resolve(#[from] ResolveError),
  #[error("generated code for `{file}` is not valid Rust: {source}")]
  Format {
    file: String,
    #[source]
    source: syn::Error,
  },
  #[error("`{type_name}` refers to `{name}`, which has no generated definition")]
  UnknownType { type_name: String, name: String },
  #[error("`x-faker` expression `{expression}` on `{type_name}.{field}` is not a valid mock call")]
  InvalidMockExpression {
    type_name: String,
    field: String,
    expression: String,
  },
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
  #[error("failed to read `{}`: {source}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("`{}` is not valid JSON: {source}", path.display())]
  Json {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },
  #[error("`{}` is not valid YAML: {source}", path.display())]
  Yaml {
    path: PathBuf,
    #[source]
    source: serde_yaml::Error,
  },
  #[error("document is not a valid OpenAPI 3 description: {0}")]
  Validation(#[source] serde_json::Error),
  #[error("failed to decode API description at `{}`: {}", .0.path(), .0.inner())]
  Decode(#[from] serde_path_to_error::Error<serde_json::Error>),
  #[error("reference `{reference}` does not point into the document")]
  UnresolvableReference { reference: String },
  #[error("circular reference: {}", cycle.join(" -> "))]
  CircularReference { cycle: Vec<String> },
  #[error("`{}` contains no JSON or YAML documents", path.display())]
  EmptyDirectory { path: PathBuf },
}
