//! Bearer-token claims extraction for `/me`.
//!
//! The API sits behind an authorizer that has already verified the token, so
//! this middleware only decodes the JWT payload segment into a claims map and
//! attaches it to the request. Signatures are not re-checked here.

use axum::{
    extract::Request,
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Verified identity claims attached to the request. Absent when the caller
/// supplied no usable bearer token.
#[derive(Debug, Clone)]
pub struct AuthorizerContext {
    pub claims: serde_json::Map<String, serde_json::Value>,
}

pub async fn authorizer_middleware(mut req: Request, next: Next) -> Response {
    if let Some(claims) = claims_from_headers(req.headers()) {
        req.extensions_mut().insert(AuthorizerContext { claims });
    }
    next.run(req).await
}

fn claims_from_headers(headers: &HeaderMap) -> Option<serde_json::Map<String, serde_json::Value>> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    decode_claims(token)
}

/// Decode the payload segment of a JWT into its claims map.
fn decode_claims(token: &str) -> Option<serde_json::Map<String, serde_json::Value>> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    match serde_json::from_slice(&bytes).ok()? {
        serde_json::Value::Object(map) => Some(map),
        _ => None,
    }
}
