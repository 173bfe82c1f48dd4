pub mod config;
pub mod dtos;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod startup;
pub mod utils;

use std::sync::Arc;

use config::Config;
use services::cognito::CognitoClient;
use services::providers::ChatProvider;

/// Shared application state: immutable configuration plus the two upstream
/// clients. Cloned per request by axum.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub cognito: Arc<CognitoClient>,
    pub chat_provider: Arc<dyn ChatProvider>,
}

impl AppState {
    pub fn new(
        config: Config,
        cognito: CognitoClient,
        chat_provider: Arc<dyn ChatProvider>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            cognito: Arc::new(cognito),
            chat_provider,
        }
    }
}
