//! Command level scenarios over in-memory storage and a scripted dictionary

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use wordcard_config::Config;
use wordcard_core::persistence::MemoryPersistence;
use wordcard_dictionary::{
    Definition, DefinitionLookup, DictionaryEntry, LookupError, Meaning, ProviderMetadata,
};
use wordcard_lang_english::EnglishProcessor;
use wordcard_types::WordRecord;

use crate::state::AppState;

mod import_tests;

/// Dictionary that knows a fixed set of words
#[derive(Default)]
pub struct ScriptedLookup {
    answers: HashMap<String, String>,
    pub calls: AtomicUsize,
}

impl ScriptedLookup {
    pub fn with(mut self, word: &str, definition: &str) -> Self {
        self.answers.insert(word.to_string(), definition.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DefinitionLookup for ScriptedLookup {
    async fn lookup(&self, word: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let definition = self
            .answers
            .get(word)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(word.to_string()))?;

        Ok(vec![DictionaryEntry {
            word: word.to_string(),
            phonetic: None,
            meanings: vec![Meaning {
                part_of_speech: "noun".to_string(),
                definitions: vec![Definition {
                    definition,
                    example: None,
                }],
            }],
        }])
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "scripted".to_string(),
            endpoint: "memory://".to_string(),
            requires_api_key: false,
        }
    }
}

pub fn test_state(
    persistence: Arc<MemoryPersistence>,
    lookup: Option<Arc<ScriptedLookup>>,
) -> AppState {
    AppState {
        config: Config::default(),
        processor: Arc::new(EnglishProcessor::new()),
        persistence,
        lookup: lookup.map(|l| l as Arc<dyn DefinitionLookup>),
        generator: None,
        glossary: HashMap::new(),
        speech: None,
    }
}

pub fn words(records: &[WordRecord]) -> Vec<&str> {
    records.iter().map(|r| r.word.as_str()).collect()
}
