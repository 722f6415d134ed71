//! Configuration for the catalog server.
//!
//! Values are merged in three layers: built-in defaults, then `config.toml`
//! (path overridable through `CONFIG_PATH`), then environment variables.
//! Catalog specific variables carry the `CATALOG_` prefix; the database URL
//! and bind address use the conventional `DATABASE_URL`, `SERVER_HOST` and
//! `SERVER_PORT`.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

pub const ENV_PREFIX: &str = "CATALOG_";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://catalog.db?mode=rwc";
/// Longest token lifetime accepted: one year.
pub const MAX_TOKEN_TTL_SECS: u64 = 365 * 24 * 60 * 60;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
    /// How long a stalled version delete waits before answering 504.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout_secs: u64,
    /// Chance that a version delete stalls until the request deadline.
    #[serde(default = "default_stall_probability")]
    pub stall_probability: f64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            worker_threads: None,
            request_timeout_secs: default_request_timeout(),
            shutdown_timeout_secs: default_shutdown_timeout(),
            stall_probability: default_stall_probability(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
    /// Drop and recreate the catalog tables at startup.
    #[serde(default = "default_true")]
    pub reset_on_start: bool,
    /// Insert the sample catalog at startup.
    #[serde(default = "default_true")]
    pub seed_on_start: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
            reset_on_start: true,
            seed_on_start: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_secret")]
    pub jwt_secret: String,
    #[serde(default = "default_token_timeout")]
    pub jwt_token_timeout_secs: u64,
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_password")]
    pub password: String,
    /// Echo the configured password in the "password is not equal to" error.
    #[serde(default)]
    pub reveal_expected_password: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_secret(),
            jwt_token_timeout_secs: default_token_timeout(),
            username: default_username(),
            password: default_password(),
            reveal_expected_password: false,
        }
    }
}

fn default_host() -> String { "0.0.0.0".into() }
fn default_port() -> u16 { 18080 }
fn default_request_timeout() -> u64 { 5 }
fn default_shutdown_timeout() -> u64 { 5 }
fn default_stall_probability() -> f64 { 0.2 }
fn default_database_url() -> String { DEFAULT_DATABASE_URL.into() }
fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 1 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_acquire_timeout() -> u64 { 30 }
fn default_true() -> bool { true }
fn default_secret() -> String { "kong".into() }
fn default_token_timeout() -> u64 { 30 * 60 }
fn default_username() -> String { "kong".into() }
fn default_password() -> String { "onward".into() }

/// Read `config.toml` (or `CONFIG_PATH`). A missing file yields defaults.
pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    match std::fs::read_to_string(&path) {
        Ok(content) => parse(&content).with_context(|| format!("invalid config file {path}")),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(anyhow!("cannot read config file {path}: {e}")),
    }
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// File + process environment + defaults, validated.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.apply_env(|key| std::env::var(key).ok())?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Apply environment overrides read through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        let prefixed = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

        if let Some(v) = prefixed("JWT_SECRET") { self.auth.jwt_secret = v; }
        if let Some(v) = prefixed("JWT_TOKEN_TIMEOUT_SECS") {
            self.auth.jwt_token_timeout_secs = parse_env("CATALOG_JWT_TOKEN_TIMEOUT_SECS", &v)?;
        }
        if let Some(v) = prefixed("USERNAME") { self.auth.username = v; }
        if let Some(v) = prefixed("PASSWORD") { self.auth.password = v; }
        if let Some(v) = prefixed("REVEAL_EXPECTED_PASSWORD") {
            self.auth.reveal_expected_password = parse_env("CATALOG_REVEAL_EXPECTED_PASSWORD", &v)?;
        }
        if let Some(v) = prefixed("REQUEST_TIMEOUT_SECS") {
            self.server.request_timeout_secs = parse_env("CATALOG_REQUEST_TIMEOUT_SECS", &v)?;
        }
        if let Some(v) = prefixed("STALL_PROBABILITY") {
            self.server.stall_probability = parse_env("CATALOG_STALL_PROBABILITY", &v)?;
        }
        if let Some(v) = lookup("SERVER_HOST") { self.server.host = v; }
        if let Some(v) = lookup("SERVER_PORT") { self.server.port = parse_env("SERVER_PORT", &v)?; }
        if let Some(v) = lookup("DATABASE_URL") { self.database.url = v; }
        Ok(())
    }

    pub fn validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.validate()?;
        self.auth.validate()?;
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| anyhow!("{name}: cannot parse {raw:?}: {e}"))
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if self.worker_threads == Some(0) {
            self.worker_threads = None;
        }
        if self.request_timeout_secs == 0 || self.shutdown_timeout_secs == 0 {
            return Err(anyhow!("server timeouts must be positive seconds"));
        }
        if !(0.0..=1.0).contains(&self.stall_probability) {
            return Err(anyhow!("server.stall_probability must be within 0.0..=1.0"));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("sqlite:")
            || lower.starts_with("postgresql://")
            || lower.starts_with("postgres://"))
        {
            return Err(anyhow!("database.url must start with sqlite:, postgres:// or postgresql://"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

impl AuthConfig {
    fn validate(&self) -> Result<()> {
        if self.jwt_secret.is_empty() {
            return Err(anyhow!("auth.jwt_secret must not be empty"));
        }
        if self.username.is_empty() || self.password.is_empty() {
            return Err(anyhow!("auth.username and auth.password must not be empty"));
        }
        if self.jwt_token_timeout_secs == 0 {
            return Err(anyhow!("auth.jwt_token_timeout_secs must be positive"));
        }
        if self.jwt_token_timeout_secs > MAX_TOKEN_TTL_SECS {
            return Err(anyhow!(
                "auth.jwt_token_timeout_secs must be at most {MAX_TOKEN_TTL_SECS}"
            ));
        }
        Ok(())
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.jwt_token_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_documented_values() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.auth.jwt_secret, "kong");
        assert_eq!(cfg.auth.username, "kong");
        assert_eq!(cfg.auth.password, "onward");
        assert_eq!(cfg.auth.token_ttl(), Duration::from_secs(1800));
        assert_eq!(cfg.server.request_timeout(), Duration::from_secs(5));
        assert_eq!(cfg.server.port, 18080);
        assert_eq!(cfg.database.url, DEFAULT_DATABASE_URL);
        assert!(!cfg.auth.reveal_expected_password);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let cfg = parse(
            r#"
            [auth]
            username = "admin"

            [server]
            port = 9000
            "#,
        )
        .unwrap();
        assert_eq!(cfg.auth.username, "admin");
        assert_eq!(cfg.auth.password, "onward");
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.stall_probability, 0.2);
        assert!(cfg.database.seed_on_start);
    }

    #[test]
    fn environment_overrides_file_values() {
        let mut cfg = parse("[auth]\njwt_secret = \"from-file\"\n").unwrap();
        cfg.apply_env(env(&[
            ("CATALOG_JWT_SECRET", "from-env"),
            ("CATALOG_JWT_TOKEN_TIMEOUT_SECS", "60"),
            ("CATALOG_STALL_PROBABILITY", "0"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("SERVER_PORT", "8081"),
        ]))
        .unwrap();
        assert_eq!(cfg.auth.jwt_secret, "from-env");
        assert_eq!(cfg.auth.jwt_token_timeout_secs, 60);
        assert_eq!(cfg.server.stall_probability, 0.0);
        assert_eq!(cfg.database.url, "sqlite::memory:");
        assert_eq!(cfg.server.port, 8081);
        cfg.validate().unwrap();
    }

    #[test]
    fn unparsable_environment_value_is_an_error() {
        let mut cfg = AppConfig::default();
        let err = cfg
            .apply_env(env(&[("CATALOG_REQUEST_TIMEOUT_SECS", "soon")]))
            .unwrap_err();
        assert!(err.to_string().contains("REQUEST_TIMEOUT_SECS"));
    }

    #[test]
    fn validation_rejects_bad_values() {
        let mut cfg = AppConfig::default();
        cfg.server.stall_probability = 1.5;
        assert!(cfg.validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.database.url = "mysql://localhost/catalog".into();
        assert!(cfg.validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.auth.jwt_secret.clear();
        assert!(cfg.validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.server.request_timeout_secs = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn token_lifetime_is_capped() {
        let mut cfg = AppConfig::default();
        cfg.auth.jwt_token_timeout_secs = MAX_TOKEN_TTL_SECS;
        assert!(cfg.validate().is_ok());

        cfg.auth.jwt_token_timeout_secs = MAX_TOKEN_TTL_SECS + 1;
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("jwt_token_timeout_secs"));

        let lookup = env(&[("CATALOG_JWT_TOKEN_TIMEOUT_SECS", "18446744073709551615")]);
        let mut cfg = AppConfig::default();
        cfg.apply_env(lookup).unwrap();
        assert!(cfg.validate().is_err());
    }
}
