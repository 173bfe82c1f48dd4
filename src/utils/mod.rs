use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::dtos::ErrorResponse;

/// JSON body extractor whose rejection is the API's fixed
/// `{"error":"Invalid request body"}` shape instead of axum's default.
pub struct RequestJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for RequestJson<T>
where
    T: DeserializeOwned + 'static,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Invalid request body".to_string(),
                }),
            )
                .into_response()
        })?;

        Ok(RequestJson(value))
    }
}
