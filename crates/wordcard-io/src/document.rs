use std::fs;
use std::path::Path;

use wordcard_core::extract::extract_text;
use wordcard_types::ImportSource;

use crate::error::SourceError;

/// Structured source document whose string leaves carry the text to mine
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Yaml(serde_yaml::Value),
    Json(serde_json::Value),
}

impl Document {
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let kind = ImportSource::from_path(path)
            .filter(|kind| *kind != ImportSource::Csv)
            .ok_or_else(|| SourceError::UnsupportedType(path.to_path_buf()))?;
        let raw = fs::read_to_string(path).map_err(|e| SourceError::read(path, e))?;
        Self::parse(kind, &raw)
    }

    pub fn parse(kind: ImportSource, raw: &str) -> Result<Self, SourceError> {
        match kind {
            ImportSource::Yaml => Ok(Self::Yaml(serde_yaml::from_str(raw)?)),
            ImportSource::Json => Ok(Self::Json(serde_json::from_str(raw)?)),
            ImportSource::Csv => Err(SourceError::UnsupportedType("csv".into())),
        }
    }

    /// Every string leaf, space separated, in document order
    pub fn text(&self) -> String {
        match self {
            Self::Yaml(value) => extract_text(value),
            Self::Json(value) => extract_text(value),
        }
    }
}
