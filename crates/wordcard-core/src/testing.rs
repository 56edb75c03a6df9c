//! Test doubles shared by the unit tests of this crate

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use wordcard_dictionary::{
    Definition, DefinitionGenerator, DefinitionLookup, DictionaryEntry, LookupError, Meaning,
    ProviderMetadata,
};

use crate::language::{LanguageProcessor, Token, generic_definition};

/// Minimal processor: ASCII letter runs, a handful of stop words, trim-only simplification
pub struct FakeProcessor;

impl LanguageProcessor for FakeProcessor {
    fn language_code(&self) -> &str {
        "xx"
    }

    fn normalize(&self, word: &str) -> String {
        word.trim().to_lowercase()
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut current = String::new();
        let mut start = 0;

        for (i, c) in text.char_indices().chain(std::iter::once((text.len(), ' '))) {
            if c.is_ascii_alphabetic() {
                if current.is_empty() {
                    start = i;
                }
                current.push(c);
            } else {
                if current.len() >= 3 {
                    tokens.push(Token {
                        surface: current.clone(),
                        normalized: current.to_lowercase(),
                        position: start,
                    });
                }
                current.clear();
            }
        }

        tokens
    }

    fn is_stop_word(&self, word: &str) -> bool {
        matches!(word, "the" | "and" | "with" | "over")
    }

    fn simplify(&self, definition: &str) -> String {
        definition.trim().to_string()
    }

    fn pattern_definition(&self, word: &str) -> String {
        generic_definition(word)
    }
}

/// Scripted dictionary: known words answer after an optional delay, anything else fails
#[derive(Default)]
pub struct FakeLookup {
    pub answers: HashMap<String, (String, Option<String>)>,
    pub delays: HashMap<String, Duration>,
    pub calls: AtomicUsize,
    pub in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    pub seen: Mutex<Vec<String>>,
}

impl FakeLookup {
    pub fn with_answer(mut self, word: &str, definition: &str, example: Option<&str>) -> Self {
        self.answers.insert(
            word.to_string(),
            (definition.to_string(), example.map(str::to_string)),
        );
        self
    }

    pub fn with_delay(mut self, word: &str, delay: Duration) -> Self {
        self.delays.insert(word.to_string(), delay);
        self
    }
}

#[async_trait::async_trait]
impl DefinitionLookup for FakeLookup {
    async fn lookup(&self, word: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(word.to_string());
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(word) {
            tokio::time::sleep(*delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let (definition, example) = self
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
                    example,
                }],
            }],
        }])
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "fake".to_string(),
            endpoint: "memory://".to_string(),
            requires_api_key: false,
        }
    }
}

/// Scripted generator: known words get their text, anything else is rate limited
#[derive(Default)]
pub struct FakeGenerator {
    pub texts: HashMap<String, String>,
    pub calls: AtomicUsize,
}

impl FakeGenerator {
    pub fn with_text(mut self, word: &str, text: &str) -> Self {
        self.texts.insert(word.to_string(), text.to_string());
        self
    }
}

#[async_trait::async_trait]
impl DefinitionGenerator for FakeGenerator {
    async fn generate(&self, word: &str) -> Result<String, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.texts
            .get(word)
            .cloned()
            .ok_or(LookupError::RateLimitExceeded)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "fake generator".to_string(),
            endpoint: "memory://".to_string(),
            requires_api_key: true,
        }
    }
}
