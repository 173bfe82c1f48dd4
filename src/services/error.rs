use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::dtos::ErrorResponse;

/// Error taxonomy shared by every handler. Each variant carries the exact
/// user-facing message serialized into the `{"error": ...}` body.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client-input error: empty body, malformed JSON, missing required field,
    /// or a provider-rejected signup/verification input.
    #[error("{0}")]
    BadRequest(String),

    /// Authentication failure or missing authorization context.
    #[error("{0}")]
    Unauthorized(String),

    /// Configuration, serialization, or unexpected upstream/network failure.
    #[error("{0}")]
    InternalError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::InternalError(err) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:#}", err))
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
