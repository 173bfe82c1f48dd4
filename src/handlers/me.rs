//! Echo the caller's identity claims.
//!
//! The claims map is attached by the authorizer middleware; this handler
//! trusts it as-is. Every individual claim is optional.

use axum::{response::IntoResponse, Extension, Json};
use serde_json::Value;

use crate::dtos::system::MeResponse;
use crate::middleware::authorizer::AuthorizerContext;
use crate::services::error::AppError;

pub async fn me(
    context: Option<Extension<AuthorizerContext>>,
) -> Result<impl IntoResponse, AppError> {
    let Some(Extension(context)) = context else {
        return Err(AppError::Unauthorized(
            "No authorization context found".to_string(),
        ));
    };

    let mut user = serde_json::Map::new();

    if let Some(sub) = context.claims.get("sub").and_then(Value::as_str) {
        user.insert("user_id".to_string(), Value::from(sub));
    }
    if let Some(email) = context.claims.get("email").and_then(Value::as_str) {
        user.insert("email".to_string(), Value::from(email));
    }
    if let Some(name) = context.claims.get("name").and_then(Value::as_str) {
        user.insert("name".to_string(), Value::from(name));
    }
    if let Some(verified) = context.claims.get("email_verified") {
        user.insert("email_verified".to_string(), verified.clone());
    }

    // Full claims map passed through for transparency.
    user.insert(
        "all_claims".to_string(),
        Value::Object(context.claims.clone()),
    );

    Ok(Json(MeResponse {
        message: "Authenticated user information".to_string(),
        user,
    }))
}
