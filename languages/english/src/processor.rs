use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use wordcard_core::language::{LanguageProcessor, Token};

use crate::patterns::pattern_definition;
use crate::simplify::simplify_definition;
use crate::stopwords::is_stop_word;

/// Runs of at least three ASCII letters; digits and punctuation split words
static WORD_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[A-Za-z]{3,}").ok());

/// English language processor
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishProcessor;

impl EnglishProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageProcessor for EnglishProcessor {
    fn language_code(&self) -> &str {
        "en"
    }

    fn normalize(&self, word: &str) -> String {
        word.nfkc().collect::<String>().trim().to_lowercase()
    }

    fn tokenize(&self, text: &str) -> Vec<Token> {
        let Some(pattern) = WORD_PATTERN.as_ref() else {
            return Vec::new();
        };

        pattern
            .find_iter(text)
            .map(|m| Token {
                surface: m.as_str().to_string(),
                normalized: m.as_str().to_lowercase(),
                position: m.start(),
            })
            .collect()
    }

    fn is_stop_word(&self, word: &str) -> bool {
        is_stop_word(word)
    }

    fn simplify(&self, definition: &str) -> String {
        simplify_definition(definition)
    }

    fn pattern_definition(&self, word: &str) -> String {
        pattern_definition(word)
    }
}
