//! Chat endpoint behavior: validation, context assembly as observed by the
//! upstream provider, and the unconfigured-key failure path.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{app_with_provider, body_json, options, post_json};
use tower::util::ServiceExt;

use tuitui_backend::config::AnthropicConfig;
use tuitui_backend::services::providers::anthropic::AnthropicProvider;
use tuitui_backend::services::providers::mock::MockChatProvider;

#[tokio::test]
async fn preflight_returns_cors_headers() {
    let response = common::test_app().oneshot(options("/chat")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    assert_eq!(
        response.headers()["access-control-allow-methods"],
        "POST,OPTIONS"
    );
}

#[tokio::test]
async fn malformed_json_is_rejected_with_fixed_message() {
    let response = common::test_app()
        .oneshot(post_json("/chat", "{invalid json}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid request body");
}

#[tokio::test]
async fn message_is_required() {
    let response = common::test_app()
        .oneshot(post_json("/chat", r#"{"message": ""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Message is required");
}

#[tokio::test]
async fn reply_comes_back_with_status_ok() {
    let provider = Arc::new(MockChatProvider::new("Hi there!"));
    let app = app_with_provider(provider);

    let response = app
        .oneshot(post_json("/chat", r#"{"message": "Hello"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Hi there!");
    assert_eq!(json["status"], "OK");
}

#[tokio::test]
async fn history_and_new_message_forwarded_in_order() {
    let provider = Arc::new(MockChatProvider::new("ok"));
    let app = app_with_provider(provider.clone());

    let body = r#"{
        "message": "And now?",
        "conversationHistory": [
            {"role": "user", "content": "What time is it?"},
            {"role": "assistant", "content": "It is noon."}
        ]
    }"#;

    let response = app.oneshot(post_json("/chat", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let calls = provider.calls();
    assert_eq!(calls.len(), 1);

    let messages = &calls[0].messages;
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].role, "user");
    assert_eq!(messages[0].content, "What time is it?");
    assert_eq!(messages[1].role, "assistant");
    assert_eq!(messages[2].role, "user");
    assert_eq!(messages[2].content, "And now?");
}

#[tokio::test]
async fn optional_context_builds_system_prompt() {
    let provider = Arc::new(MockChatProvider::new("ok"));
    let app = app_with_provider(provider.clone());

    let body = r##"{
        "message": "Hello",
        "team": "Platform",
        "teamInfo": ["eu-west-2", "on-call"],
        "markdownContent": "# Runbook"
    }"##;

    let response = app.oneshot(post_json("/chat", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let calls = provider.calls();
    let system = calls[0].system.as_deref().expect("system prompt expected");
    assert!(system.starts_with("You have access to the following additional context:"));
    assert!(system.contains("Team: Platform"));
    assert!(system.contains("Team Information: eu-west-2, on-call"));
    assert!(system.contains("Additional context from uploaded document:\n# Runbook"));
}

#[tokio::test]
async fn no_optional_context_means_no_system_prompt() {
    let provider = Arc::new(MockChatProvider::new("ok"));
    let app = app_with_provider(provider.clone());

    let response = app
        .oneshot(post_json("/chat", r#"{"message": "Hello"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(provider.calls()[0].system, None);
}

#[tokio::test]
async fn missing_api_key_fails_with_500() {
    let provider = Arc::new(
        AnthropicProvider::new(AnthropicConfig {
            api_key: String::new(),
            model: "claude-3-haiku-20240307".to_string(),
        })
        .expect("provider"),
    );
    let app = app_with_provider(provider);

    let response = app
        .oneshot(post_json("/chat", r#"{"message": "Hello"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    let error = json["error"].as_str().unwrap();
    assert!(error.contains("Failed to get response from Claude"));
    assert!(error.contains("API key not configured"));
}
