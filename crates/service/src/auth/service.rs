use std::time::Duration;

use jsonwebtoken::{encode, EncodingKey, Header as JwtHeader};
use tracing::{info, instrument, warn};

use super::domain::{Claims, Credentials};
use super::errors::AuthError;

/// Token settings shared by the issuer and the authenticator.
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub username: String,
    pub password: String,
    /// Put the configured password into the mismatch message.
    pub reveal_expected_password: bool,
}

impl From<&configs::AuthConfig> for AuthConfig {
    fn from(cfg: &configs::AuthConfig) -> Self {
        Self {
            jwt_secret: cfg.jwt_secret.clone(),
            token_ttl: cfg.token_ttl(),
            username: cfg.username.clone(),
            password: cfg.password.clone(),
            reveal_expected_password: cfg.reveal_expected_password,
        }
    }
}

/// Exchanges the configured username and password for an HS256 token.
pub struct TokenIssuer {
    cfg: AuthConfig,
    key: EncodingKey,
}

impl TokenIssuer {
    pub fn new(cfg: AuthConfig) -> Self {
        let key = EncodingKey::from_secret(cfg.jwt_secret.as_bytes());
        Self { cfg, key }
    }

    /// Check the credentials and mint a token valid for the configured TTL.
    ///
    /// A wrong password is reported before a wrong username.
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    /// use service::auth::{AuthConfig, TokenIssuer, TokenAuthenticator};
    /// use service::auth::domain::Credentials;
    ///
    /// let cfg = AuthConfig {
    ///     jwt_secret: "secret".into(),
    ///     token_ttl: Duration::from_secs(60),
    ///     username: "kong".into(),
    ///     password: "onward".into(),
    ///     reveal_expected_password: false,
    /// };
    /// let issuer = TokenIssuer::new(cfg.clone());
    /// let token = issuer
    ///     .issue(&Credentials { username: "kong".into(), password: "onward".into() })
    ///     .unwrap();
    /// let claims = TokenAuthenticator::new(&cfg).verify(&token).unwrap();
    /// assert_eq!(claims.username, "kong");
    /// ```
    #[instrument(skip(self, creds), fields(username = %creds.username))]
    pub fn issue(&self, creds: &Credentials) -> Result<String, AuthError> {
        if creds.password != self.cfg.password {
            warn!(event = "invalid_login", reason = "password", "login rejected");
            let expected = self.cfg.reveal_expected_password.then(|| self.cfg.password.clone());
            return Err(AuthError::PasswordMismatch { expected });
        }
        if creds.username != self.cfg.username {
            warn!(event = "invalid_login", reason = "username", "login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let exp = i64::try_from(self.cfg.token_ttl.as_secs())
            .ok()
            .and_then(|ttl| chrono::Utc::now().timestamp().checked_add(ttl))
            .ok_or_else(|| AuthError::TokenError("token lifetime out of range".into()))?;
        let claims = Claims { username: creds.username.clone(), exp };
        let token = encode(&JwtHeader::default(), &claims, &self.key)
            .map_err(|e| AuthError::TokenError(e.to_string()))?;
        info!(event = "token_issued", exp, "token issued");
        Ok(token)
    }
}
