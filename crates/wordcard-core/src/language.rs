/// Text processing interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "en", ...)
    fn language_code(&self) -> &str;

    /// Normalize a single word into its store key form
    fn normalize(&self, word: &str) -> String;

    /// Break text into word tokens, in order of appearance
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Function words never offered as study candidates
    fn is_stop_word(&self, word: &str) -> bool;

    /// Rewrite a dictionary definition into short, plain wording.
    /// May return an empty string when nothing useful is left.
    fn simplify(&self, definition: &str) -> String;

    /// Best-effort definition guessed from the shape of the word alone.
    /// Must never be empty.
    fn pattern_definition(&self, word: &str) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    pub normalized: String,
    pub position: usize,
}

/// Last-resort definition when no strategy produced anything
pub fn generic_definition(word: &str) -> String {
    format!("A word with meaning related to \"{word}\"")
}
