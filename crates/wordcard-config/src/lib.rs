use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use self::extract::ExtractConfig;
use self::generator::GeneratorConfig;
use self::lookup::LookupConfig;
use self::speech::SpeechConfig;
use self::storage::StorageConfig;

pub mod extract;
pub mod generator;
pub mod lookup;
pub mod speech;
pub mod storage;

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub lookup: LookupConfig,
    pub extract: ExtractConfig,
    pub storage: StorageConfig,
    pub speech: SpeechConfig,
    pub generator: GeneratorConfig,

    /// Optional word -> definition file consulted before the remote lookup
    pub glossary_path: Option<PathBuf>,
}

impl Config {
    pub fn new() -> Self {
        Self::default().with_env_overrides()
    }

    /// Overlay `WORDCARD_*` environment variables on top of the current values
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = env::var("WORDCARD_LOOKUP_URL") {
            self.lookup.endpoint = url;
        }

        if let Some(timeout_ms) = env::var("WORDCARD_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.lookup.timeout_ms = timeout_ms;
        }

        if let Some(batch_size) = env::var("WORDCARD_BATCH_SIZE")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|v| *v > 0)
        {
            self.lookup.batch_size = batch_size;
        }

        if let Ok(dir) = env::var("WORDCARD_DATA_DIR") {
            self.storage.data_dir = PathBuf::from(dir);
        }

        if let Ok(slot) = env::var("WORDCARD_SLOT") {
            self.storage.slot = slot;
        }

        // A key in the environment turns generation on
        if let Some(key) = env::var("WORDCARD_GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
        {
            self.generator.api_key = key;
            self.generator.enabled = true;
        }

        self
    }

    /// Default location of the user config file
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wordcard")
            .join("config.json")
    }
}
