//! Anthropic Messages API provider.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{ChatProvider, ProviderError};
use crate::config::{AnthropicConfig, DEFAULT_MAX_TOKENS};
use crate::dtos::chat::ChatMessage;

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Fixed reply used when the API returns a well-formed but contentless
/// response.
const EMPTY_RESPONSE_PLACEHOLDER: &str = "No response from Claude";

pub struct AnthropicProvider {
    config: AnthropicConfig,
    client: Client,
}

impl AnthropicProvider {
    pub fn new(config: AnthropicConfig) -> Result<Self, anyhow::Error> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| anyhow::anyhow!("failed to create HTTP client: {}", e))?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl ChatProvider for AnthropicProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        system: Option<&str>,
    ) -> Result<String, ProviderError> {
        // Fail before any network I/O when no key is configured.
        if self.config.api_key.is_empty() {
            return Err(ProviderError::NotConfigured(
                "Anthropic API key not configured".to_string(),
            ));
        }

        let request = MessagesRequest {
            model: &self.config.model,
            max_tokens: DEFAULT_MAX_TOKENS,
            messages,
            system,
        };

        tracing::debug!(
            model = %self.config.model,
            message_count = messages.len(),
            has_system = system.is_some(),
            "sending request to Anthropic API"
        );

        let response = self
            .client
            .post(MESSAGES_URL)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError(format!("Claude API error: {}", body)));
        }

        let api_response: MessagesResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ApiError(format!("failed to parse response: {}", e)))?;

        let text = api_response
            .content
            .first()
            .and_then(|block| block.text.clone());

        Ok(text.unwrap_or_else(|| EMPTY_RESPONSE_PLACEHOLDER.to_string()))
    }
}

// ============================================================================
// Anthropic API request/response types
// ============================================================================

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}
