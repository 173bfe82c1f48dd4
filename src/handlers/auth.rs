//! Signup, login and verification endpoints backed by Cognito.

use axum::{extract::State, response::IntoResponse, Json};

use crate::dtos::auth::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, RegisterResponse,
    ResendCodeRequest, VerifyRequest,
};
use crate::services::cognito::{CognitoError, CognitoErrorKind};
use crate::services::error::AppError;
use crate::utils::RequestJson;
use crate::AppState;

pub async fn login(
    State(state): State<AppState>,
    RequestJson(req): RequestJson<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    let tokens = match state.cognito.initiate_auth(&req.email, &req.password).await {
        Ok(tokens) => tokens,
        Err(err @ CognitoError::Api { .. }) => {
            tracing::warn!(kind = ?err.kind(), "login rejected by Cognito");
            return Err(AppError::Unauthorized(login_error_message(&err)));
        }
        Err(err) => {
            return Err(AppError::InternalError(anyhow::anyhow!(
                "Authentication failed: {}",
                err
            )));
        }
    };

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        id_token: tokens.id_token,
        token_type: tokens.token_type,
        expires_in: tokens.expires_in,
    }))
}

pub async fn register(
    State(state): State<AppState>,
    RequestJson(req): RequestJson<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    if req.email.is_empty() || req.password.is_empty() || req.name.is_empty() {
        return Err(AppError::BadRequest(
            "Email, password, and name are required".to_string(),
        ));
    }

    let user_sub = match state
        .cognito
        .sign_up(&req.email, &req.password, &req.name)
        .await
    {
        Ok(user_sub) => user_sub,
        Err(err @ CognitoError::Api { .. }) => {
            tracing::warn!(kind = ?err.kind(), "signup rejected by Cognito");
            return Err(AppError::BadRequest(register_error_message(&err)));
        }
        Err(err) => {
            return Err(AppError::InternalError(anyhow::anyhow!(
                "Registration failed: {}",
                err
            )));
        }
    };

    Ok(Json(RegisterResponse {
        message: "Registration successful. Please check your email to confirm your account."
            .to_string(),
        user_sub,
    }))
}

pub async fn verify(
    State(state): State<AppState>,
    RequestJson(req): RequestJson<VerifyRequest>,
) -> Result<impl IntoResponse, AppError> {
    if req.email.is_empty() || req.code.is_empty() {
        return Err(AppError::BadRequest(
            "Email and verification code are required".to_string(),
        ));
    }

    match state.cognito.confirm_sign_up(&req.email, &req.code).await {
        Ok(()) => {}
        Err(err @ CognitoError::Api { .. }) => {
            tracing::warn!(kind = ?err.kind(), "confirmation rejected by Cognito");
            return Err(AppError::BadRequest(verify_error_message(&err)));
        }
        Err(err) => {
            return Err(AppError::InternalError(anyhow::anyhow!(
                "Verification failed: {}",
                err
            )));
        }
    }

    Ok(Json(MessageResponse {
        message: "Email verified successfully. You can now sign in.".to_string(),
    }))
}

pub async fn resend_code(
    State(state): State<AppState>,
    RequestJson(req): RequestJson<ResendCodeRequest>,
) -> Result<impl IntoResponse, AppError> {
    if req.email.is_empty() {
        return Err(AppError::BadRequest("Email is required".to_string()));
    }

    match state.cognito.resend_confirmation_code(&req.email).await {
        Ok(()) => {}
        Err(err @ CognitoError::Api { .. }) => {
            tracing::warn!(kind = ?err.kind(), "resend rejected by Cognito");
            return Err(AppError::BadRequest(resend_error_message(&err)));
        }
        Err(err) => {
            return Err(AppError::InternalError(anyhow::anyhow!(
                "Failed to resend code: {}",
                err
            )));
        }
    }

    Ok(Json(MessageResponse {
        message: "Verification code has been resent to your email.".to_string(),
    }))
}

// Per-operation translation of classified Cognito errors into the user-facing
// messages. Unmapped kinds fall back to "<operation> failed: <raw error>".

fn login_error_message(err: &CognitoError) -> String {
    match err.kind() {
        CognitoErrorKind::NotAuthorized => "Invalid email or password.".to_string(),
        CognitoErrorKind::UserNotFound => "No account found with this email.".to_string(),
        CognitoErrorKind::UserNotConfirmed => {
            "Please verify your email address before signing in.".to_string()
        }
        _ => format!("Authentication failed: {}", err),
    }
}

fn register_error_message(err: &CognitoError) -> String {
    match err.kind() {
        CognitoErrorKind::InvalidPassword => {
            "Password does not meet requirements. Please use at least 8 characters \
             with uppercase, lowercase, numbers, and special characters."
                .to_string()
        }
        CognitoErrorKind::UsernameExists => {
            "An account with this email already exists.".to_string()
        }
        CognitoErrorKind::InvalidParameter => {
            "Invalid input. Please check your email and password.".to_string()
        }
        _ => format!("Registration failed: {}", err),
    }
}

fn verify_error_message(err: &CognitoError) -> String {
    match err.kind() {
        CognitoErrorKind::CodeMismatch => {
            "Invalid verification code. Please check and try again.".to_string()
        }
        CognitoErrorKind::ExpiredCode => {
            "Verification code has expired. Please request a new code.".to_string()
        }
        CognitoErrorKind::NotAuthorized => {
            "User is already verified or the code is invalid.".to_string()
        }
        _ => format!("Verification failed: {}", err),
    }
}

fn resend_error_message(err: &CognitoError) -> String {
    match err.kind() {
        CognitoErrorKind::UserNotFound => "No account found with this email.".to_string(),
        CognitoErrorKind::InvalidParameter => "User is already verified.".to_string(),
        CognitoErrorKind::LimitExceeded => {
            "Too many requests. Please wait a few minutes and try again.".to_string()
        }
        _ => format!("Failed to resend code: {}", err),
    }
}
