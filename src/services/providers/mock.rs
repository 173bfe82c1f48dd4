//! Recording mock provider for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{ChatProvider, ProviderError};
use crate::dtos::chat::ChatMessage;

/// One captured upstream call.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub messages: Vec<ChatMessage>,
    pub system: Option<String>,
}

/// Mock provider that records every call and answers with a canned reply.
pub struct MockChatProvider {
    reply: String,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockChatProvider {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        system: Option<&str>,
    ) -> Result<String, ProviderError> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push(RecordedCall {
                messages: messages.to_vec(),
                system: system.map(str::to_string),
            });

        Ok(self.reply.clone())
    }
}
