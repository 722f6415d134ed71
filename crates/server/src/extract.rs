use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::errors::JsonApiError;

/// JSON body extractor that ignores `Content-Type` and answers
/// `400 {"error": "Invalid request payload"}` on any decoding failure.
pub struct JsonPayload<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonPayload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            warn!(error = %e, "unreadable request body");
            JsonApiError::invalid_payload()
        })?;
        serde_json::from_slice(&bytes).map(JsonPayload).map_err(|e| {
            warn!(error = %e, "invalid request payload");
            JsonApiError::invalid_payload()
        })
    }
}
