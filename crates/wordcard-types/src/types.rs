use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// One learning record: a word, its simplified definition and the learner's flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    pub definition: String,
    #[serde(default)]
    pub known: bool,
    /// Milliseconds since the Unix epoch
    #[serde(default)]
    pub timestamp: u64,
}

impl WordRecord {
    /// Create an unknown record stamped with the current time
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
            known: false,
            timestamp: now_millis(),
        }
    }

    /// Case-insensitive store key
    pub fn key(&self) -> String {
        self.word.to_lowercase()
    }
}

pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// Input accepted by the study loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyCommand {
    Flip,
    Previous,
    Next,
    MarkUnknown,
    MarkKnown,
    ToggleFilter,
    Speak,
    Leave,
}

impl StudyCommand {
    /// Map a key name or typed line to a command
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        // An empty line is what Enter sends
        if key.is_empty() {
            return Some(Self::Flip);
        }

        match key.to_lowercase().as_str() {
            "space" | "enter" | " " => Some(Self::Flip),
            "left" | "arrowleft" | "p" | "prev" => Some(Self::Previous),
            "right" | "arrowright" | "n" | "next" => Some(Self::Next),
            "1" => Some(Self::MarkUnknown),
            "2" => Some(Self::MarkKnown),
            "f" | "filter" => Some(Self::ToggleFilter),
            "s" | "speak" => Some(Self::Speak),
            "q" | "quit" | "back" => Some(Self::Leave),
            _ => None,
        }
    }
}

/// Kind of source document handed to the importer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportSource {
    Yaml,
    Json,
    Csv,
}

impl ImportSource {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}
