use serde::Serialize;

/// Configuration echo returned by `/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: String,
    pub environment: String,
    pub aws_region: String,
    pub api_version: String,
    pub status: String,
}

/// Identity echo returned by `/me`. `user` holds whichever known claims were
/// present plus the full claims map under `all_claims`.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub message: String,
    pub user: serde_json::Map<String, serde_json::Value>,
}
