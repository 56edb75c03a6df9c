use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use wordcard_config::Config;
use wordcard_core::fetcher::DefinitionBatchFetcher;
use wordcard_core::language::LanguageProcessor;
use wordcard_core::persistence::PersistenceClient;
use wordcard_core::resolver::DefinitionResolver;
use wordcard_core::speech::SpeechClient;
use wordcard_core::store::WordStore;
use wordcard_dictionary::{DefinitionGenerator, DefinitionLookup};
use wordcard_io::{JsonFileStore, load_glossary};
use wordcard_lang_english::{DictionaryApiClient, EnglishProcessor, GeminiClient, builtin_glossary};

use crate::speech::CommandSpeech;

/// Everything a command needs, built once from the config
pub struct AppState {
    pub config: Config,
    pub processor: Arc<dyn LanguageProcessor>,
    pub persistence: Arc<dyn PersistenceClient>,
    pub lookup: Option<Arc<dyn DefinitionLookup>>,
    pub generator: Option<Arc<dyn DefinitionGenerator>>,
    pub glossary: HashMap<String, String>,
    pub speech: Option<Arc<dyn SpeechClient>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let timeout = Duration::from_millis(config.lookup.timeout_ms);

        let lookup: Option<Arc<dyn DefinitionLookup>> = if config.lookup.enabled {
            Some(Arc::new(DictionaryApiClient::with_timeout(
                config.lookup.endpoint.clone(),
                timeout,
            )))
        } else {
            tracing::info!("Online dictionary disabled, using local heuristics");
            None
        };

        let generator: Option<Arc<dyn DefinitionGenerator>> = config
            .generator
            .is_usable()
            .then(|| {
                Arc::new(GeminiClient::with_timeout(
                    config.generator.api_key.clone(),
                    config.generator.api_url.clone(),
                    timeout,
                )) as Arc<dyn DefinitionGenerator>
            });

        let glossary = merged_glossary(config.glossary_path.as_deref());

        let speech: Option<Arc<dyn SpeechClient>> = config
            .speech
            .enabled
            .then(|| Arc::new(CommandSpeech::new(config.speech.clone())) as Arc<dyn SpeechClient>);

        let persistence = Arc::new(JsonFileStore::new(config.storage.slot_path()));

        Self {
            processor: Arc::new(EnglishProcessor::new()),
            persistence,
            lookup,
            generator,
            glossary,
            speech,
            config,
        }
    }

    pub fn open_store(&self) -> anyhow::Result<WordStore> {
        Ok(WordStore::load(Arc::clone(&self.persistence))?)
    }

    /// Glossary, then the network services when `remote` is set, then patterns
    pub fn resolver(&self, remote: bool) -> DefinitionResolver {
        let timeout = Duration::from_millis(self.config.lookup.timeout_ms);
        let mut builder = DefinitionResolver::builder(Arc::clone(&self.processor))
            .glossary(self.glossary.clone());

        if let Some(generator) = self.generator.as_ref().filter(|_| remote) {
            builder = builder.generator(Arc::clone(generator), timeout);
        }

        if let Some(lookup) = self.lookup.as_ref().filter(|_| remote) {
            builder = builder.remote(Arc::clone(lookup), timeout);
        }

        builder.build()
    }

    pub fn fetcher(&self, remote: bool) -> DefinitionBatchFetcher {
        DefinitionBatchFetcher::with_batch_size(
            Arc::new(self.resolver(remote)),
            self.config.lookup.batch_size,
        )
    }
}

/// The bundled glossary with the user's file laid over it.
/// A broken user file is skipped so imports still work.
pub fn merged_glossary(user_path: Option<&Path>) -> HashMap<String, String> {
    let mut glossary = builtin_glossary();

    if let Some(path) = user_path {
        match load_glossary(path) {
            Ok(entries) => {
                tracing::info!("Loaded {} glossary entries from {}", entries.len(), path.display());
                glossary.extend(entries);
            }
            Err(e) => tracing::warn!("Ignoring glossary: {}", e),
        }
    }

    glossary
}
