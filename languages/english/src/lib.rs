pub mod dictionary_api;
pub mod gemini;
pub mod glossary;
pub mod meaning;
pub mod patterns;
pub mod processor;
pub mod simplify;
pub mod stopwords;

pub use dictionary_api::DictionaryApiClient;
pub use gemini::GeminiClient;
pub use glossary::builtin_glossary;
pub use meaning::derive_definition;
pub use patterns::pattern_definition;
pub use processor::EnglishProcessor;
pub use simplify::simplify_definition;
pub use stopwords::is_stop_word;
