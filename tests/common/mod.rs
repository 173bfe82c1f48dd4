//! Shared helpers for router-level integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;

use tuitui_backend::config::Config;
use tuitui_backend::services::cognito::CognitoClient;
use tuitui_backend::services::providers::{mock::MockChatProvider, ChatProvider};
use tuitui_backend::startup::build_router;
use tuitui_backend::AppState;

pub fn test_config() -> Config {
    Config::load().expect("config should load from defaults")
}

/// Router wired with the given chat provider and a Cognito client built from
/// default settings. Tests that exercise validation paths never reach it.
pub fn app_with_provider(provider: Arc<dyn ChatProvider>) -> Router {
    let config = test_config();
    let cognito =
        CognitoClient::new(&config.cognito, &config.aws_region).expect("cognito client");
    build_router(AppState::new(config, cognito, provider))
}

pub fn test_app() -> Router {
    app_with_provider(Arc::new(MockChatProvider::new("Mock reply")))
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn options(uri: &str) -> Request<Body> {
    Request::builder()
        .method("OPTIONS")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
