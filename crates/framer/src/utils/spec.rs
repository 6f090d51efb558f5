use std::{
  ffi::OsStr,
  path::{Path, PathBuf},
};

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};
use serde_json::Value;

use super::refs;
use crate::generator::{document::ApiDescription, errors::LoadError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DescriptionFormat {
  #[default]
  Json,
  Yaml,
}

impl DescriptionFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    match ext {
      "yaml" | "yml" => Self::Yaml,
      _ => Self::Json,
    }
  }

  #[must_use]
  pub fn from_path(path: &Path) -> Self {
    path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(Self::default(), Self::from_extension)
  }
}

/// A memory-mapped API description document, not yet validated.
pub struct DescriptionLoader {
  path: PathBuf,
  file: AsyncMmapFile,
  format: DescriptionFormat,
}

impl DescriptionLoader {
  pub async fn open(path: &Path) -> Result<Self, LoadError> {
    let file = AsyncMmapFile::open(path).await.map_err(|err| LoadError::Io {
      path: path.to_path_buf(),
      source: std::io::Error::other(err.to_string()),
    })?;

    Ok(Self {
      path: path.to_path_buf(),
      file,
      format: DescriptionFormat::from_path(path),
    })
  }

  /// Parses the raw document. YAML is converted to the JSON data model.
  pub fn parse(&self) -> Result<Value, LoadError> {
    let bytes = self.file.as_slice();
    match self.format {
      DescriptionFormat::Json => serde_json::from_slice(bytes).map_err(|source| LoadError::Json {
        path: self.path.clone(),
        source,
      }),
      DescriptionFormat::Yaml => {
        let yaml: serde_yaml::Value = serde_yaml::from_slice(bytes).map_err(|source| LoadError::Yaml {
          path: self.path.clone(),
          source,
        })?;
        serde_json::to_value(yaml).map_err(|source| LoadError::Json {
          path: self.path.clone(),
          source,
        })
      }
    }
  }
}

/// Validates, dereferences and decodes a raw API description document.
pub fn decode_description(document: &Value) -> Result<ApiDescription, LoadError> {
  serde_json::from_value::<oas3::Spec>(document.clone()).map_err(LoadError::Validation)?;
  let dereferenced = refs::dereference(document)?;
  Ok(serde_path_to_error::deserialize(dereferenced)?)
}

pub async fn load_description(path: &Path) -> Result<ApiDescription, LoadError> {
  let document = DescriptionLoader::open(path).await?.parse()?;
  decode_description(&document)
}
