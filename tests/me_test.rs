//! Identity-claims echo endpoint.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use common::{body_json, test_app};
use tower::util::ServiceExt;

/// Unsigned JWT carrying the given payload. Signature content is irrelevant:
/// verification happens upstream of this service.
fn bearer_token(payload: &str) -> String {
    format!(
        "Bearer {}.{}.{}",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"RS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(payload),
        URL_SAFE_NO_PAD.encode("signature")
    )
}

fn get_me(authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri("/me");
    if let Some(value) = authorization {
        builder = builder.header("authorization", value);
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn missing_authorization_yields_401() {
    let response = test_app().oneshot(get_me(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "No authorization context found");
}

#[tokio::test]
async fn garbage_token_yields_401() {
    let response = test_app()
        .oneshot(get_me(Some("Bearer not-a-jwt")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "No authorization context found");
}

#[tokio::test]
async fn known_claims_are_echoed_verbatim() {
    let token = bearer_token(
        r#"{"sub":"abc-123","email":"user@example.com","name":"Test User","email_verified":"true"}"#,
    );
    let response = test_app().oneshot(get_me(Some(&token))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Authenticated user information");

    let user = &json["user"];
    assert_eq!(user["user_id"], "abc-123");
    assert_eq!(user["email"], "user@example.com");
    assert_eq!(user["name"], "Test User");
    assert_eq!(user["email_verified"], "true");
    assert_eq!(user["all_claims"]["sub"], "abc-123");
}

#[tokio::test]
async fn individual_missing_claims_are_omitted_not_errors() {
    let token = bearer_token(r#"{"sub":"abc-123"}"#);
    let response = test_app().oneshot(get_me(Some(&token))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let user = json["user"].as_object().unwrap();
    assert_eq!(user["user_id"], "abc-123");
    assert!(!user.contains_key("email"));
    assert!(!user.contains_key("name"));
}
