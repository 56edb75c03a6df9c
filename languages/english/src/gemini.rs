use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use wordcard_dictionary::{DefinitionGenerator, LookupError, ProviderMetadata};

/// Length limit asked of the model, in words
const MAX_WORDS: usize = 15;

/// Client for Gemini `generateContent` endpoints
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
        }
    }

    pub fn with_timeout(api_key: String, api_url: String, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build HTTP client with timeout: {}", e);
                reqwest::Client::new()
            });

        Self {
            client,
            api_key,
            api_url,
        }
    }

    fn prompt(word: &str) -> String {
        format!(
            "Please explain the word \"{word}\" in very simple English, using only basic \
             vocabulary that a beginner can understand. Keep it to one short sentence \
             (maximum {MAX_WORDS} words). Don't use difficult words."
        )
    }
}

#[async_trait]
impl DefinitionGenerator for GeminiClient {
    async fn generate(&self, word: &str) -> Result<String, LookupError> {
        if self.api_key.is_empty() {
            return Err(LookupError::AuthenticationFailed(
                "no API key configured".to_string(),
            ));
        }

        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": Self::prompt(word) }] }]
        });

        let response = self
            .client
            .post(&self.api_url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => return Err(LookupError::RateLimitExceeded),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(LookupError::AuthenticationFailed(format!(
                    "HTTP {}",
                    response.status()
                )));
            }
            status if !status.is_success() => {
                return Err(LookupError::ApiError(format!("HTTP {}", status)));
            }
            _ => {}
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LookupError::MalformedResponse(e.to_string()))?;

        let text = json["candidates"]
            .get(0)
            .and_then(|c| c["content"]["parts"].get(0))
            .and_then(|p| p["text"].as_str())
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| LookupError::MalformedResponse("No text in response".to_string()))?;

        Ok(text.to_string())
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Gemini".to_string(),
            endpoint: self.api_url.clone(),
            requires_api_key: true,
        }
    }
}
