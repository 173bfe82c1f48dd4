pub mod auth;
pub mod chat;
pub mod system;

use serde::{Deserialize, Serialize};

/// The only failure body shape used by the API.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
