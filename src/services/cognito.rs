//! Cognito Identity Provider gateway.
//!
//! Thin client for the four user-pool operations this backend needs:
//! `InitiateAuth` (USER_PASSWORD_AUTH), `SignUp`, `ConfirmSignUp` and
//! `ResendConfirmationCode`. All four are client-side Cognito APIs, called as
//! plain `application/x-amz-json-1.1` requests parameterized by the
//! configured app-client id; no request signing is involved.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::CognitoConfig;

const AMZ_JSON: &str = "application/x-amz-json-1.1";
const TARGET_PREFIX: &str = "AWSCognitoIdentityProviderService";

/// Structured classification of a Cognito error response.
///
/// Derived from the `__type` field of the error body; substring matching on
/// the raw error text is kept only as a fallback for responses where `__type`
/// is missing or unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CognitoErrorKind {
    NotAuthorized,
    UserNotFound,
    UserNotConfirmed,
    InvalidPassword,
    UsernameExists,
    InvalidParameter,
    CodeMismatch,
    ExpiredCode,
    LimitExceeded,
    Unrecognized,
}

#[derive(Debug, Error)]
pub enum CognitoError {
    /// Cognito rejected the request. `message` is the raw provider error text.
    #[error("{message}")]
    Api {
        kind: CognitoErrorKind,
        message: String,
    },

    #[error("request to Cognito failed: {0}")]
    Network(String),

    #[error("failed to parse Cognito response: {0}")]
    Decode(String),
}

impl CognitoError {
    pub fn kind(&self) -> CognitoErrorKind {
        match self {
            CognitoError::Api { kind, .. } => *kind,
            _ => CognitoErrorKind::Unrecognized,
        }
    }
}

/// Map an exception name (or, failing that, raw error text) to a kind.
fn classify(exception: &str, raw: &str) -> CognitoErrorKind {
    // `__type` is sometimes fully qualified ("com.amazonaws...#Name").
    let name = exception.rsplit('#').next().unwrap_or(exception);

    let table = [
        ("NotAuthorizedException", CognitoErrorKind::NotAuthorized),
        ("UserNotFoundException", CognitoErrorKind::UserNotFound),
        ("UserNotConfirmedException", CognitoErrorKind::UserNotConfirmed),
        ("InvalidPasswordException", CognitoErrorKind::InvalidPassword),
        ("UsernameExistsException", CognitoErrorKind::UsernameExists),
        ("InvalidParameterException", CognitoErrorKind::InvalidParameter),
        ("CodeMismatchException", CognitoErrorKind::CodeMismatch),
        ("ExpiredCodeException", CognitoErrorKind::ExpiredCode),
        ("LimitExceededException", CognitoErrorKind::LimitExceeded),
    ];

    for (pattern, kind) in table {
        if name == pattern {
            return kind;
        }
    }

    // Fallback: scan the raw error text for the same exception names.
    for (pattern, kind) in table {
        if raw.contains(pattern) {
            return kind;
        }
    }

    CognitoErrorKind::Unrecognized
}

/// Token set returned by a successful USER_PASSWORD_AUTH exchange.
#[derive(Debug, Clone)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub id_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

pub struct CognitoClient {
    client: Client,
    endpoint: String,
    client_id: String,
}

impl CognitoClient {
    pub fn new(settings: &CognitoConfig, region: &str) -> Result<Self, anyhow::Error> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| anyhow::anyhow!("failed to create HTTP client: {}", e))?;

        Ok(Self {
            client,
            endpoint: format!("https://cognito-idp.{}.amazonaws.com/", region),
            client_id: settings.client_id.clone(),
        })
    }

    pub async fn initiate_auth(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthTokens, CognitoError> {
        let request = InitiateAuthRequest {
            auth_flow: "USER_PASSWORD_AUTH",
            client_id: &self.client_id,
            auth_parameters: AuthParameters {
                username: email,
                password,
            },
        };

        let response: InitiateAuthResponse = self.call("InitiateAuth", &request).await?;

        let result = response.authentication_result.ok_or_else(|| {
            CognitoError::Decode("no authentication result in response".to_string())
        })?;

        Ok(AuthTokens {
            access_token: result.access_token,
            refresh_token: result.refresh_token,
            id_token: result.id_token,
            token_type: result.token_type,
            expires_in: result.expires_in,
        })
    }

    /// Create an unconfirmed account. Returns the new user's subject id.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<String, CognitoError> {
        let request = SignUpRequest {
            client_id: &self.client_id,
            username: email,
            password,
            user_attributes: vec![
                UserAttribute {
                    name: "email",
                    value: email,
                },
                UserAttribute {
                    name: "name",
                    value: name,
                },
            ],
        };

        let response: SignUpResponse = self.call("SignUp", &request).await?;
        Ok(response.user_sub)
    }

    pub async fn confirm_sign_up(&self, email: &str, code: &str) -> Result<(), CognitoError> {
        let request = ConfirmSignUpRequest {
            client_id: &self.client_id,
            username: email,
            confirmation_code: code,
        };

        let _: serde_json::Value = self.call("ConfirmSignUp", &request).await?;
        Ok(())
    }

    pub async fn resend_confirmation_code(&self, email: &str) -> Result<(), CognitoError> {
        let request = ResendConfirmationCodeRequest {
            client_id: &self.client_id,
            username: email,
        };

        let _: serde_json::Value = self.call("ResendConfirmationCode", &request).await?;
        Ok(())
    }

    /// Issue a single `x-amz-json-1.1` call and decode the response.
    async fn call<B, R>(&self, operation: &str, body: &B) -> Result<R, CognitoError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body)
            .map_err(|e| CognitoError::Decode(format!("failed to encode request: {}", e)))?;

        tracing::debug!(operation, "calling Cognito");

        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", AMZ_JSON)
            .header("x-amz-target", format!("{}.{}", TARGET_PREFIX, operation))
            .body(payload)
            .send()
            .await
            .map_err(|e| CognitoError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| CognitoError::Network(e.to_string()))?;

        if !status.is_success() {
            let parsed: ErrorBody = serde_json::from_str(&text).unwrap_or_default();
            let kind = classify(parsed.error_type.as_deref().unwrap_or(""), &text);
            let message = match (parsed.error_type, parsed.message) {
                (Some(t), Some(m)) => format!("{}: {}", t, m),
                (Some(t), None) => t,
                (None, Some(m)) => m,
                (None, None) => text,
            };

            tracing::warn!(operation, status = %status, ?kind, "Cognito rejected request");
            return Err(CognitoError::Api { kind, message });
        }

        serde_json::from_str(&text).map_err(|e| CognitoError::Decode(e.to_string()))
    }
}

// ============================================================================
// Cognito API request/response types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct InitiateAuthRequest<'a> {
    auth_flow: &'a str,
    client_id: &'a str,
    auth_parameters: AuthParameters<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "UPPERCASE")]
struct AuthParameters<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InitiateAuthResponse {
    authentication_result: Option<AuthenticationResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AuthenticationResult {
    access_token: String,
    refresh_token: String,
    id_token: String,
    token_type: String,
    expires_in: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct SignUpRequest<'a> {
    client_id: &'a str,
    username: &'a str,
    password: &'a str,
    user_attributes: Vec<UserAttribute<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct UserAttribute<'a> {
    name: &'a str,
    value: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SignUpResponse {
    user_sub: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct ConfirmSignUpRequest<'a> {
    client_id: &'a str,
    username: &'a str,
    confirmation_code: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct ResendConfirmationCodeRequest<'a> {
    client_id: &'a str,
    username: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type")]
    error_type: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
}
