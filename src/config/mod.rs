use serde::Deserialize;
use std::env;

/// Default max output tokens requested from the Claude Messages API.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-haiku-20240307";

/// Application configuration, loaded once at startup from environment
/// variables and passed explicitly through shared state. Immutable after load.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// e.g. "development", "staging", "production"
    pub environment: String,
    /// e.g. "debug", "info", "warn", "error"
    pub log_level: String,
    pub aws_region: String,
    pub api_version: String,
    pub server: ServerConfig,
    pub cognito: CognitoConfig,
    pub anthropic: AnthropicConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CognitoConfig {
    pub user_pool_id: String,
    pub client_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnthropicConfig {
    pub api_key: String,
    pub model: String,
}

/// Datastore settings, reserved for future use. Nothing reads these yet.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
}

impl Config {
    pub fn load() -> Result<Self, anyhow::Error> {
        Ok(Config {
            environment: get_env("ENVIRONMENT", "development"),
            log_level: get_env("LOG_LEVEL", "info"),
            // Default to eu-west-2 to match the deployment region
            aws_region: get_env("AWS_REGION", "eu-west-2"),
            api_version: get_env("API_VERSION", "v1"),
            server: ServerConfig {
                host: get_env("HOST", "0.0.0.0"),
                port: get_env_parsed("PORT", 8080)?,
            },
            cognito: CognitoConfig {
                user_pool_id: get_env("COGNITO_USER_POOL_ID", ""),
                client_id: get_env("COGNITO_USER_POOL_CLIENT_ID", ""),
            },
            anthropic: AnthropicConfig {
                api_key: get_env("ANTHROPIC_API_KEY", ""),
                model: get_env("ANTHROPIC_MODEL", DEFAULT_ANTHROPIC_MODEL),
            },
            database: DatabaseConfig {
                host: get_env("DB_HOST", ""),
                port: get_env_parsed("DB_PORT", 5432)?,
                name: get_env("DB_NAME", ""),
                user: get_env("DB_USER", ""),
                password: get_env("DB_PASSWORD", ""),
            },
        })
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_env_parsed<T>(key: &str, default: T) -> Result<T, anyhow::Error>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(val) => val
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid value for {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
