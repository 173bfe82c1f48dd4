use serde::{Deserialize, Serialize};

/// One turn of a conversation, both in the inbound history and in the
/// sequence forwarded upstream. Role is "user" or "assistant".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Chat request body. Optional context fields use the frontend's camelCase
/// naming.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,

    #[serde(default, rename = "conversationHistory")]
    pub conversation_history: Vec<ChatMessage>,

    #[serde(default)]
    pub team: String,

    #[serde(default, rename = "teamInfo")]
    pub team_info: Vec<String>,

    #[serde(default, rename = "markdownContent")]
    pub markdown_content: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub environment: String,
    pub aws_region: String,
    pub api_version: String,
    pub status: String,
}

