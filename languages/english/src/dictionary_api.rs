use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use wordcard_dictionary::{DefinitionLookup, DictionaryEntry, LookupError, ProviderMetadata};

/// Client for dictionaryapi.dev style services: `GET {endpoint}/{word}`
#[derive(Clone)]
pub struct DictionaryApiClient {
    client: reqwest::Client,
    endpoint: String,
}

impl DictionaryApiClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Client whose requests give up after `timeout`
    pub fn with_timeout(endpoint: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                reqwest::Client::new()
            });

        Self { client, endpoint }
    }

    fn word_url(&self, word: &str) -> Result<Url, LookupError> {
        let mut url = Url::parse(&self.endpoint)
            .map_err(|e| LookupError::InvalidEndpoint(format!("{}: {}", self.endpoint, e)))?;

        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidEndpoint(self.endpoint.clone()))?
            .pop_if_empty()
            .push(word);

        Ok(url)
    }
}

#[async_trait]
impl DefinitionLookup for DictionaryApiClient {
    async fn lookup(&self, word: &str) -> Result<Vec<DictionaryEntry>, LookupError> {
        let url = self.word_url(word)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(LookupError::NotFound(word.to_string())),
            StatusCode::TOO_MANY_REQUESTS => return Err(LookupError::RateLimitExceeded),
            status if !status.is_success() => {
                return Err(LookupError::ApiError(format!("HTTP {}", status)));
            }
            _ => {}
        }

        let entries: Vec<DictionaryEntry> = response
            .json()
            .await
            .map_err(|e| LookupError::MalformedResponse(e.to_string()))?;

        if entries.is_empty() {
            return Err(LookupError::NotFound(word.to_string()));
        }

        Ok(entries)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Free Dictionary API".to_string(),
            endpoint: self.endpoint.clone(),
            requires_api_key: false,
        }
    }
}
