use std::collections::HashMap;
use std::fs;
use std::path::Path;

use wordcard_types::ImportSource;

use crate::error::SourceError;

/// Read a flat word → definition map from JSON or YAML. Keys are lowercased.
pub fn load_glossary(path: &Path) -> Result<HashMap<String, String>, SourceError> {
    let raw = fs::read_to_string(path).map_err(|e| SourceError::read(path, e))?;
    let entries: HashMap<String, String> = match ImportSource::from_path(path) {
        Some(ImportSource::Yaml) => serde_yaml::from_str(&raw)?,
        Some(ImportSource::Json) => serde_json::from_str(&raw)?,
        _ => return Err(SourceError::UnsupportedType(path.to_path_buf())),
    };

    let entries: HashMap<_, _> = entries
        .into_iter()
        .map(|(word, definition)| (word.trim().to_lowercase(), definition.trim().to_string()))
        .filter(|(word, definition)| !word.is_empty() && !definition.is_empty())
        .collect();

    tracing::info!("Loaded {} glossary entries from {}", entries.len(), path.display());
    Ok(entries)
}
