//! Conversational-AI provider abstraction.
//!
//! A trait-based seam so the chat handler can run against the real Anthropic
//! backend in production and a recording mock in tests.

pub mod anthropic;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

use crate::dtos::chat::ChatMessage;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0}")]
    NotConfigured(String),

    #[error("{0}")]
    ApiError(String),

    #[error("network error: {0}")]
    NetworkError(String),
}

#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send the assembled message sequence (and optional system context)
    /// upstream and return the generated reply text.
    async fn complete(
        &self,
        messages: &[ChatMessage],
        system: Option<&str>,
    ) -> Result<String, ProviderError>;
}
