use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    auth::{login, register, resend_code, verify},
    chat::chat,
    health::health,
    me::me,
};
use crate::middleware::{authorizer::authorizer_middleware, cors::cors_middleware};
use crate::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/verify", post(verify))
        .route("/auth/resend-code", post(resend_code))
        .route("/chat", post(chat))
        .route("/me", get(me).layer(from_fn(authorizer_middleware)))
        .route("/health", get(health))
        // Preflight short-circuit plus cross-origin headers on every response.
        .layer(from_fn(cors_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
