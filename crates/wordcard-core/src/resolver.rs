use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use wordcard_dictionary::{DefinitionGenerator, DefinitionLookup, LookupError, primary_definition};
use wordcard_types::WordRecord;

use crate::language::{LanguageProcessor, generic_definition};

/// Default per-word remote lookup timeout
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Examples at or above this many characters are not appended
const MAX_EXAMPLE_CHARS: usize = 80;

/// Which link of the fallback chain produced a definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionSource {
    Glossary,
    Generated,
    Remote,
    Pattern,
    Generic,
}

impl fmt::Display for DefinitionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DefinitionSource::Glossary => "glossary",
            DefinitionSource::Generated => "generated",
            DefinitionSource::Remote => "remote",
            DefinitionSource::Pattern => "pattern",
            DefinitionSource::Generic => "generic",
        };
        f.write_str(name)
    }
}

/// One link of the fallback chain
#[async_trait::async_trait]
pub trait DefinitionStrategy: Send + Sync {
    fn source(&self) -> DefinitionSource;

    /// Definition for an already normalized word, None to fall through
    async fn define(&self, word: &str) -> Option<String>;
}

/// User supplied word -> definition table
pub struct GlossaryStrategy {
    entries: HashMap<String, String>,
}

impl GlossaryStrategy {
    pub fn new(entries: HashMap<String, String>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(word, definition)| (word.trim().to_lowercase(), definition.trim().to_string()))
            .filter(|(_, definition)| !definition.is_empty())
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait::async_trait]
impl DefinitionStrategy for GlossaryStrategy {
    fn source(&self) -> DefinitionSource {
        DefinitionSource::Glossary
    }

    async fn define(&self, word: &str) -> Option<String> {
        self.entries.get(word).cloned()
    }
}

/// Remote dictionary lookup followed by the simplification pass
pub struct RemoteStrategy {
    client: Arc<dyn DefinitionLookup>,
    processor: Arc<dyn LanguageProcessor>,
    timeout: Duration,
}

impl RemoteStrategy {
    pub fn new(
        client: Arc<dyn DefinitionLookup>,
        processor: Arc<dyn LanguageProcessor>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            processor,
            timeout,
        }
    }
}

#[async_trait::async_trait]
impl DefinitionStrategy for RemoteStrategy {
    fn source(&self) -> DefinitionSource {
        DefinitionSource::Remote
    }

    async fn define(&self, word: &str) -> Option<String> {
        if word.is_empty() {
            return None;
        }

        let entries = match within(self.timeout, self.client.lookup(word)).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Dictionary lookup failed for '{}': {}", word, e);
                return None;
            }
        };

        let Some(primary) = primary_definition(&entries) else {
            tracing::debug!("No definitions in response for '{}'", word);
            return None;
        };

        let simplified = self.processor.simplify(&primary.text);
        if simplified.is_empty() {
            tracing::debug!("Definition for '{}' simplified to nothing", word);
            return None;
        }

        tracing::trace!("'{}' ({}): {}", word, primary.part_of_speech, simplified);

        Some(with_example(simplified, primary.example.as_deref()))
    }
}

/// Plain explanation written by a text generation service, used as is
pub struct GeneratedStrategy {
    generator: Arc<dyn DefinitionGenerator>,
    timeout: Duration,
}

impl GeneratedStrategy {
    pub fn new(generator: Arc<dyn DefinitionGenerator>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }
}

#[async_trait::async_trait]
impl DefinitionStrategy for GeneratedStrategy {
    fn source(&self) -> DefinitionSource {
        DefinitionSource::Generated
    }

    async fn define(&self, word: &str) -> Option<String> {
        if word.is_empty() {
            return None;
        }

        match within(self.timeout, self.generator.generate(word)).await {
            Ok(text) => Some(text.trim().to_string()).filter(|text| !text.is_empty()),
            Err(e) => {
                tracing::warn!("Generating a definition for '{}' failed: {}", word, e);
                None
            }
        }
    }
}

/// Run a provider call, turning an elapsed deadline into `LookupError::Timeout`.
/// Dropping the call on timeout cancels that request only.
pub async fn within<T, F>(timeout: Duration, call: F) -> Result<T, LookupError>
where
    F: Future<Output = Result<T, LookupError>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => Err(LookupError::Timeout(timeout.as_millis() as u64)),
    }
}

/// Heuristic definition from word shape, never falls through
pub struct PatternStrategy {
    processor: Arc<dyn LanguageProcessor>,
}

impl PatternStrategy {
    pub fn new(processor: Arc<dyn LanguageProcessor>) -> Self {
        Self { processor }
    }
}

#[async_trait::async_trait]
impl DefinitionStrategy for PatternStrategy {
    fn source(&self) -> DefinitionSource {
        DefinitionSource::Pattern
    }

    async fn define(&self, word: &str) -> Option<String> {
        Some(self.processor.pattern_definition(word)).filter(|d| !d.trim().is_empty())
    }
}

/// Append a short usage example as its own paragraph
pub fn with_example(definition: String, example: Option<&str>) -> String {
    match example.map(str::trim) {
        Some(example) if !example.is_empty() && example.chars().count() < MAX_EXAMPLE_CHARS => {
            format!("{definition}\n\nExample: {example}")
        }
        _ => definition,
    }
}

/// Resolves a word to a record by walking the fallback chain.
/// Total: every input yields a record with a non-empty definition.
pub struct DefinitionResolver {
    processor: Arc<dyn LanguageProcessor>,
    strategies: Vec<Box<dyn DefinitionStrategy>>,
}

impl DefinitionResolver {
    /// Local-only resolver: pattern heuristics
    pub fn new(processor: Arc<dyn LanguageProcessor>) -> Self {
        Self::builder(processor).build()
    }

    pub fn builder(processor: Arc<dyn LanguageProcessor>) -> ResolverBuilder {
        ResolverBuilder {
            processor,
            glossary: None,
            generated: None,
            remote: None,
        }
    }

    /// Strategy order, for diagnostics
    pub fn chain(&self) -> Vec<DefinitionSource> {
        self.strategies.iter().map(|s| s.source()).collect()
    }

    pub fn processor(&self) -> &Arc<dyn LanguageProcessor> {
        &self.processor
    }

    pub async fn resolve(&self, word: &str) -> WordRecord {
        self.resolve_with_source(word).await.0
    }

    pub async fn resolve_with_source(&self, word: &str) -> (WordRecord, DefinitionSource) {
        let word = self.processor.normalize(word);

        for strategy in &self.strategies {
            if let Some(definition) = strategy.define(&word).await {
                tracing::debug!("'{}' defined by {}", word, strategy.source());
                return (WordRecord::new(word, definition), strategy.source());
            }
        }

        let definition = generic_definition(&word);
        (WordRecord::new(word, definition), DefinitionSource::Generic)
    }
}

pub struct ResolverBuilder {
    processor: Arc<dyn LanguageProcessor>,
    glossary: Option<GlossaryStrategy>,
    generated: Option<GeneratedStrategy>,
    remote: Option<RemoteStrategy>,
}

impl ResolverBuilder {
    pub fn glossary(mut self, entries: HashMap<String, String>) -> Self {
        self.glossary = Some(GlossaryStrategy::new(entries));
        self
    }

    pub fn generator(mut self, generator: Arc<dyn DefinitionGenerator>, timeout: Duration) -> Self {
        tracing::debug!("Generating definitions with {}", generator.metadata().name);
        self.generated = Some(GeneratedStrategy::new(generator, timeout));
        self
    }

    pub fn remote(mut self, client: Arc<dyn DefinitionLookup>, timeout: Duration) -> Self {
        let provider = client.metadata();
        tracing::debug!("Looking up definitions at {} ({})", provider.name, provider.endpoint);
        self.remote = Some(RemoteStrategy::new(
            client,
            Arc::clone(&self.processor),
            timeout,
        ));
        self
    }

    /// Chain order: glossary, generated, remote, pattern
    pub fn build(self) -> DefinitionResolver {
        let mut strategies: Vec<Box<dyn DefinitionStrategy>> = Vec::new();

        if let Some(glossary) = self.glossary.filter(|g| !g.is_empty()) {
            strategies.push(Box::new(glossary));
        }
        if let Some(generated) = self.generated {
            strategies.push(Box::new(generated));
        }
        if let Some(remote) = self.remote {
            strategies.push(Box::new(remote));
        }
        strategies.push(Box::new(PatternStrategy::new(Arc::clone(&self.processor))));

        tracing::debug!(
            "Resolver for '{}': {}",
            self.processor.language_code(),
            strategies
                .iter()
                .map(|s| s.source().to_string())
                .collect::<Vec<_>>()
                .join(" -> ")
        );

        DefinitionResolver {
            processor: self.processor,
            strategies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeGenerator, FakeLookup, FakeProcessor};

    fn processor() -> Arc<dyn LanguageProcessor> {
        Arc::new(FakeProcessor)
    }

    #[tokio::test]
    async fn remote_answer_wins_and_keeps_short_example() {
        let lookup = FakeLookup::default().with_answer(
            "tide",
            " The rise and fall of the sea ",
            Some("The tide is coming in."),
        );
        let resolver = DefinitionResolver::builder(processor())
            .remote(Arc::new(lookup), DEFAULT_LOOKUP_TIMEOUT)
            .build();

        let (record, source) = resolver.resolve_with_source("Tide").await;
        assert_eq!(source, DefinitionSource::Remote);
        assert_eq!(record.word, "tide");
        assert_eq!(
            record.definition,
            "The rise and fall of the sea\n\nExample: The tide is coming in."
        );
        assert!(!record.known);
        assert!(record.timestamp > 0);
    }

    #[tokio::test]
    async fn long_example_is_dropped() {
        let example = "x".repeat(80);
        let lookup = FakeLookup::default().with_answer("gale", "A very strong wind", Some(&example));
        let resolver = DefinitionResolver::builder(processor())
            .remote(Arc::new(lookup), DEFAULT_LOOKUP_TIMEOUT)
            .build();

        assert_eq!(resolver.resolve("gale").await.definition, "A very strong wind");
    }

    #[tokio::test]
    async fn remote_failure_falls_back_to_pattern() {
        let lookup = Arc::new(FakeLookup::default());
        let resolver = DefinitionResolver::builder(processor())
            .remote(lookup.clone(), DEFAULT_LOOKUP_TIMEOUT)
            .build();

        let (record, source) = resolver.resolve_with_source("zyx").await;
        assert_eq!(source, DefinitionSource::Pattern);
        assert_eq!(record.definition, "A word with meaning related to \"zyx\"");
        assert_eq!(lookup.calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn blank_simplification_falls_through() {
        let lookup = FakeLookup::default().with_answer("hush", "   ", None);
        let resolver = DefinitionResolver::builder(processor())
            .remote(Arc::new(lookup), DEFAULT_LOOKUP_TIMEOUT)
            .build();

        let (_, source) = resolver.resolve_with_source("hush").await;
        assert_eq!(source, DefinitionSource::Pattern);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_lookup_times_out() {
        let lookup = FakeLookup::default()
            .with_answer("slow", "Late answer", None)
            .with_delay("slow", Duration::from_secs(30));
        let resolver = DefinitionResolver::builder(processor())
            .remote(Arc::new(lookup), DEFAULT_LOOKUP_TIMEOUT)
            .build();

        let (record, source) = resolver.resolve_with_source("slow").await;
        assert_eq!(source, DefinitionSource::Pattern);
        assert_ne!(record.definition, "Late answer");
    }

    #[tokio::test(start_paused = true)]
    async fn elapsed_deadline_is_a_timeout_error() {
        let lookup = FakeLookup::default()
            .with_answer("slow", "Late answer", None)
            .with_delay("slow", Duration::from_secs(30));

        let result = within(Duration::from_millis(1500), lookup.lookup("slow")).await;
        assert!(matches!(result, Err(LookupError::Timeout(1500))));

        let quick = within(DEFAULT_LOOKUP_TIMEOUT, lookup.lookup("missing")).await;
        assert!(matches!(quick, Err(LookupError::NotFound(_))));
    }

    #[tokio::test]
    async fn generated_text_precedes_remote() {
        let generator = Arc::new(FakeGenerator::default().with_text("gust", " A short strong wind "));
        let lookup = Arc::new(
            FakeLookup::default()
                .with_answer("gust", "Remote gust", None)
                .with_answer("gale", "A very strong wind", None),
        );
        let resolver = DefinitionResolver::builder(processor())
            .glossary(HashMap::from([("tide".to_string(), "Sea level change".to_string())]))
            .generator(generator.clone(), DEFAULT_LOOKUP_TIMEOUT)
            .remote(lookup.clone(), DEFAULT_LOOKUP_TIMEOUT)
            .build();

        assert_eq!(
            resolver.chain(),
            vec![
                DefinitionSource::Glossary,
                DefinitionSource::Generated,
                DefinitionSource::Remote,
                DefinitionSource::Pattern
            ]
        );

        let (record, source) = resolver.resolve_with_source("gust").await;
        assert_eq!(source, DefinitionSource::Generated);
        assert_eq!(record.definition, "A short strong wind");

        // A failed generation falls through to the dictionary
        let (record, source) = resolver.resolve_with_source("gale").await;
        assert_eq!(source, DefinitionSource::Remote);
        assert_eq!(record.definition, "A very strong wind");

        let (_, source) = resolver.resolve_with_source("tide").await;
        assert_eq!(source, DefinitionSource::Glossary);
        assert_eq!(generator.calls.load(std::sync::atomic::Ordering::SeqCst), 2);
        assert_eq!(lookup.calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn glossary_precedes_remote() {
        let lookup = Arc::new(FakeLookup::default().with_answer("magma", "Remote text", None));
        let glossary = HashMap::from([(
            "Magma".to_string(),
            "Hot melted rock under the ground".to_string(),
        )]);
        let resolver = DefinitionResolver::builder(processor())
            .glossary(glossary)
            .remote(lookup.clone(), DEFAULT_LOOKUP_TIMEOUT)
            .build();

        assert_eq!(
            resolver.chain(),
            vec![
                DefinitionSource::Glossary,
                DefinitionSource::Remote,
                DefinitionSource::Pattern
            ]
        );
        let (record, source) = resolver.resolve_with_source("magma").await;
        assert_eq!(source, DefinitionSource::Glossary);
        assert_eq!(record.definition, "Hot melted rock under the ground");
        assert_eq!(lookup.calls.load(std::sync::atomic::Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn total_over_odd_input() {
        let lookup = Arc::new(FakeLookup::default());
        let resolver = DefinitionResolver::builder(processor())
            .remote(lookup.clone(), DEFAULT_LOOKUP_TIMEOUT)
            .build();

        for word in ["", "   ", "12345", "café", "日本語", "a-b"] {
            let record = resolver.resolve(word).await;
            assert!(!record.definition.is_empty(), "empty definition for {word:?}");
        }
        // The empty word never reaches the network
        assert!(!lookup.seen.lock().unwrap().contains(&String::new()));
    }
}
