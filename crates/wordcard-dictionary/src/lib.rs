use serde::{Deserialize, Serialize};

/// Remote dictionary provider interface
#[async_trait::async_trait]
pub trait DefinitionLookup: Send + Sync {
    /// Fetch the entries for an exact, lowercase word
    async fn lookup(&self, word: &str) -> Result<Vec<DictionaryEntry>, LookupError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

/// Text generation service asked to explain a word in plain words
#[async_trait::async_trait]
pub trait DefinitionGenerator: Send + Sync {
    /// One short explanation for a lowercase word
    async fn generate(&self, word: &str) -> Result<String, LookupError>;

    fn metadata(&self) -> ProviderMetadata;
}

/// One headword as returned by the dictionary service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DictionaryEntry {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meaning {
    #[serde(rename = "partOfSpeech", default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
}

/// The definition the resolver works from: first meaning, first definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryDefinition {
    pub text: String,
    pub part_of_speech: String,
    pub example: Option<String>,
}

/// Pick the primary definition out of a lookup response
pub fn primary_definition(entries: &[DictionaryEntry]) -> Option<PrimaryDefinition> {
    let meaning = entries.first()?.meanings.first()?;
    let definition = meaning.definitions.first()?;

    Some(PrimaryDefinition {
        text: definition.definition.clone(),
        part_of_speech: meaning.part_of_speech.clone(),
        example: definition.example.clone(),
    })
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub endpoint: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Word not found: {0}")]
    NotFound(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Lookup timed out after {0} ms")]
    Timeout(u64),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),
}
