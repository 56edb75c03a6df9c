use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_endpoint() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_batch_size() -> usize {
    3
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LookupConfig {
    /// Query the remote dictionary before falling back to local heuristics
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Base URL, the word is appended as the last path segment
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Per-word request timeout
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Lookups running concurrently within one batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            endpoint: default_endpoint(),
            timeout_ms: default_timeout_ms(),
            batch_size: default_batch_size(),
        }
    }
}
