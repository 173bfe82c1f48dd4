//! Conversation context assembly for the chat endpoint.
//!
//! Pure functions: optional context fields are rendered as labelled parts
//! joined with blank lines, and the upstream message sequence is the prior
//! turns followed by the new user turn.

use crate::dtos::chat::{ChatMessage, ChatRequest};

const CONTEXT_PREAMBLE: &str = "You have access to the following additional context:";

/// Build the system-level context string from the optional request fields.
/// Returns `None` when no optional field is present.
pub fn build_system_prompt(request: &ChatRequest) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();

    if !request.team.is_empty() {
        parts.push(format!("Team: {}", request.team));
    }
    if !request.team_info.is_empty() {
        parts.push(format!("Team Information: {}", request.team_info.join(", ")));
    }
    if !request.markdown_content.is_empty() {
        parts.push(format!(
            "Additional context from uploaded document:\n{}",
            request.markdown_content
        ));
    }

    if parts.is_empty() {
        None
    } else {
        Some(format!("{}\n\n{}", CONTEXT_PREAMBLE, parts.join("\n\n")))
    }
}

/// Build the ordered message sequence: prior turns, then the new user turn.
pub fn build_messages(request: &ChatRequest) -> Vec<ChatMessage> {
    let mut messages = request.conversation_history.clone();
    messages.push(ChatMessage {
        role: "user".to_string(),
        content: request.message.clone(),
    });
    messages
}
