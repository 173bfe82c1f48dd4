//! Chat endpoint: assemble conversation context and forward it to Claude.

use axum::{extract::State, response::IntoResponse, Json};

use crate::dtos::chat::{ChatRequest, ChatResponse};
use crate::services::error::AppError;
use crate::services::prompt;
use crate::utils::RequestJson;
use crate::AppState;

pub async fn chat(
    State(state): State<AppState>,
    RequestJson(req): RequestJson<ChatRequest>,
) -> Result<impl IntoResponse, AppError> {
    if req.message.is_empty() {
        return Err(AppError::BadRequest("Message is required".to_string()));
    }

    let system_prompt = prompt::build_system_prompt(&req);
    let messages = prompt::build_messages(&req);

    tracing::info!(
        history_len = req.conversation_history.len(),
        total_messages = messages.len(),
        has_system = system_prompt.is_some(),
        "forwarding conversation to Claude"
    );

    let reply = state
        .chat_provider
        .complete(&messages, system_prompt.as_deref())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to get response from Claude: {}", e))?;

    Ok(Json(ChatResponse {
        message: reply,
        environment: state.config.environment.clone(),
        aws_region: state.config.aws_region.clone(),
        api_version: state.config.api_version.clone(),
        status: "OK".to_string(),
    }))
}
