use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use tracing::debug;

use super::domain::Claims;
use super::errors::AuthError;
use super::service::AuthConfig;

/// Verifies `Authorization: Bearer <token>` headers.
///
/// Only HMAC-signed tokens are accepted; expiry is checked with no leeway.
#[derive(Clone)]
pub struct TokenAuthenticator {
    key: DecodingKey,
    validation: Validation,
}

impl TokenAuthenticator {
    pub fn new(cfg: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.leeway = 0;
        Self { key: DecodingKey::from_secret(cfg.jwt_secret.as_bytes()), validation }
    }

    /// Check a raw header value and return the token claims.
    pub fn authenticate(&self, header: Option<&str>) -> Result<Claims, AuthError> {
        let header = header.ok_or(AuthError::MissingHeader)?;
        let token = bearer_token(header)?;
        self.verify(token)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.key, &self.validation).map_err(|e| {
            debug!(error = %e, "token rejected");
            AuthError::InvalidToken(e.to_string())
        })?;
        Ok(data.claims)
    }
}

/// Split `Bearer <token>`. The scheme is case-insensitive and exactly one
/// space separates it from the token.
pub fn bearer_token(header: &str) -> Result<&str, AuthError> {
    let parts: Vec<&str> = header.split(' ').collect();
    match parts.as_slice() {
        [scheme, token] if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}
