use std::path::{Path, PathBuf};

use serde_json::Value;

use super::spec::DescriptionLoader;
use crate::generator::errors::LoadError;

const DOCUMENT_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// Merges every YAML or JSON document of `directory` into one, in file name order.
pub async fn combine_directory(directory: &Path) -> Result<Value, LoadError> {
  let files = document_files(directory).await?;
  if files.is_empty() {
    return Err(LoadError::EmptyDirectory {
      path: directory.to_path_buf(),
    });
  }

  let mut combined = Value::Object(serde_json::Map::new());
  for file in files {
    let document = DescriptionLoader::open(&file).await?.parse()?;
    merge(&mut combined, document);
  }
  Ok(combined)
}

async fn document_files(directory: &Path) -> Result<Vec<PathBuf>, LoadError> {
  let io_error = |source: std::io::Error| LoadError::Io {
    path: directory.to_path_buf(),
    source,
  };

  let mut entries = tokio::fs::read_dir(directory).await.map_err(io_error)?;
  let mut files = vec![];
  while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
    let path = entry.path();
    let is_document = path
      .extension()
      .and_then(|ext| ext.to_str())
      .is_some_and(|ext| DOCUMENT_EXTENSIONS.contains(&ext));
    if is_document && entry.file_type().await.map_err(io_error)?.is_file() {
      files.push(path);
    }
  }
  files.sort();
  Ok(files)
}

/// Deep merge: objects merge key by key, arrays concatenate, anything else is
/// replaced by `source`.
pub fn merge(target: &mut Value, source: Value) {
  match (target, source) {
    (Value::Object(target), Value::Object(source)) => {
      for (key, value) in source {
        match target.get_mut(&key) {
          Some(existing) => merge(existing, value),
          None => {
            target.insert(key, value);
          }
        }
      }
    }
    (Value::Array(target), Value::Array(source)) => target.extend(source),
    (target, source) => *target = source,
  }
}

/// Writes the combined document as YAML, creating parent directories.
pub async fn write_combined(path: &Path, document: &Value) -> Result<(), LoadError> {
  let io_error = |source: std::io::Error| LoadError::Io {
    path: path.to_path_buf(),
    source,
  };

  let yaml = serde_yaml::to_string(document).map_err(|source| LoadError::Yaml {
    path: path.to_path_buf(),
    source,
  })?;
  if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
    tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
  }
  tokio::fs::write(path, yaml).await.map_err(io_error)
}
