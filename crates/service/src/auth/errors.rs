use thiserror::Error;

/// Business errors for token workflows
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("password is not equal to {}", expected.as_deref().unwrap_or("the configured password"))]
    PasswordMismatch { expected: Option<String> },
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("missing authorization header")]
    MissingHeader,
    #[error("malformed authorization header")]
    MalformedHeader,
    #[error("invalid token: {0}")]
    InvalidToken(String),
    #[error("token error: {0}")]
    TokenError(String),
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::PasswordMismatch { .. } => 1001,
            AuthError::InvalidCredentials => 1002,
            AuthError::MissingHeader => 1003,
            AuthError::MalformedHeader => 1004,
            AuthError::InvalidToken(_) => 1005,
            AuthError::TokenError(_) => 1102,
        }
    }
}
