//! Static configuration echo.

use axum::{extract::State, Json};

use crate::dtos::system::HealthResponse;
use crate::AppState;

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Hello World from TuiTui!".to_string(),
        environment: state.config.environment.clone(),
        aws_region: state.config.aws_region.clone(),
        api_version: state.config.api_version.clone(),
        status: "OK".to_string(),
    })
}
