use std::collections::HashMap;

/// Curated plain-English definitions for common IELTS words
const BUILTIN_GLOSSARY: &str = include_str!("glossary.yaml");

/// The bundled word -> definition table, keys lowercase
pub fn builtin_glossary() -> HashMap<String, String> {
    match serde_yaml::from_str::<HashMap<String, String>>(BUILTIN_GLOSSARY) {
        Ok(entries) => entries
            .into_iter()
            .map(|(word, definition)| (word.to_lowercase(), definition))
            .collect(),
        Err(e) => {
            tracing::error!("Bundled glossary is invalid: {}", e);
            HashMap::new()
        }
    }
}
