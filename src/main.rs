use std::sync::Arc;

use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tuitui_backend::config::Config;
use tuitui_backend::services::cognito::CognitoClient;
use tuitui_backend::services::providers::anthropic::AnthropicProvider;
use tuitui_backend::services::providers::ChatProvider;
use tuitui_backend::startup::build_router;
use tuitui_backend::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cognito = CognitoClient::new(&config.cognito, &config.aws_region)?;
    let chat_provider: Arc<dyn ChatProvider> =
        Arc::new(AnthropicProvider::new(config.anthropic.clone())?);

    info!(
        environment = %config.environment,
        region = %config.aws_region,
        model = %config.anthropic.model,
        "initialized upstream clients"
    );

    let address = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, cognito, chat_provider);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
    })?;

    info!("Starting tuitui-backend on {}", address);
    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
