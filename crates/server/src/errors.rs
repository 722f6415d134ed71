use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::ErrorBody;
use service::auth::errors::AuthError;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

pub const INVALID_PAYLOAD: &str = "Invalid request payload";
pub const UNAUTHORIZED: &str = "Unauthorized";
pub const INTERNAL: &str = "Internal server error";
pub const REQUEST_TIMED_OUT: &str = "Request timed out";

/// Error answered as `{"error": message}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn invalid_payload() -> Self { Self::new(StatusCode::BAD_REQUEST, INVALID_PAYLOAD) }

    pub fn unauthorized() -> Self { Self::new(StatusCode::UNAUTHORIZED, UNAUTHORIZED) }

    pub fn not_found(message: impl Into<String>) -> Self { Self::new(StatusCode::NOT_FOUND, message) }

    pub fn internal() -> Self { Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL) }

    pub fn timed_out() -> Self { Self::new(StatusCode::GATEWAY_TIMEOUT, REQUEST_TIMED_OUT) }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody::new(self.message))).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match (&e, e.public_message()) {
            (ServiceError::NotFound(_), Some(m)) => JsonApiError::not_found(m),
            (_, Some(m)) => JsonApiError::new(StatusCode::BAD_REQUEST, m),
            (_, None) => {
                error!(error = %e, "store failure");
                JsonApiError::internal()
            }
        }
    }
}

impl From<AuthError> for JsonApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::PasswordMismatch { .. } | AuthError::InvalidCredentials => {
                JsonApiError::new(StatusCode::UNAUTHORIZED, e.to_string())
            }
            AuthError::TokenError(ref detail) => {
                error!(code = e.code(), error = %detail, "token signing failed");
                JsonApiError::internal()
            }
            _ => JsonApiError::unauthorized(),
        }
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn store_detail_is_not_exposed() {
        let e: JsonApiError = ServiceError::Db("UNIQUE constraint failed".into()).into();
        assert_eq!(e, JsonApiError::internal());
        let e: JsonApiError = ServiceError::Model(ModelError::Db("disk I/O".into())).into();
        assert_eq!(e.message, INTERNAL);
    }

    #[test]
    fn validation_and_not_found_keep_their_text() {
        let e: JsonApiError = ServiceError::Model(ModelError::Validation("too long".into())).into();
        assert_eq!((e.status, e.message.as_str()), (StatusCode::BAD_REQUEST, "too long"));
        let e: JsonApiError = ServiceError::not_found("Service").into();
        assert_eq!((e.status, e.message.as_str()), (StatusCode::NOT_FOUND, "Service not found"));
    }

    #[test]
    fn header_failures_collapse_to_unauthorized() {
        let e: JsonApiError = AuthError::MalformedHeader.into();
        assert_eq!(e, JsonApiError::unauthorized());
        let e: JsonApiError = AuthError::InvalidCredentials.into();
        assert_eq!(e.message, "Invalid username or password");
    }
}
