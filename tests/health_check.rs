mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{body_json, test_app};
use tower::util::ServiceExt;

#[tokio::test]
async fn health_check_works() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "OK");
    assert!(json["message"].as_str().unwrap().len() > 0);
    assert!(json["environment"].is_string());
    assert!(json["aws_region"].is_string());
    assert!(json["api_version"].is_string());
}

#[tokio::test]
async fn health_responses_carry_cors_headers() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}
