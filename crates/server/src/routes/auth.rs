use std::{sync::Arc, time::Duration};

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use configs::AppConfig;
use sea_orm::DatabaseConnection;
use service::{
    auth::{AuthConfig, TokenAuthenticator, TokenIssuer},
    catalog::{CatalogService, SeaOrmServiceRepository},
    stall::{RandomStall, StallPolicy},
    versions::{SeaOrmVersionRepository, VersionService},
};
use tracing::warn;

use crate::errors::JsonApiError;

#[derive(Clone)]
pub struct ServerState {
    pub catalog: Arc<CatalogService<SeaOrmServiceRepository>>,
    pub versions: Arc<VersionService<SeaOrmVersionRepository>>,
    pub issuer: Arc<TokenIssuer>,
    pub authenticator: Arc<TokenAuthenticator>,
    pub stall: Arc<dyn StallPolicy>,
    /// Deadline of a stalled version delete.
    pub request_timeout: Duration,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, cfg: &AppConfig) -> Self {
        let auth = AuthConfig::from(&cfg.auth);
        Self {
            catalog: Arc::new(CatalogService::new(Arc::new(SeaOrmServiceRepository { db: db.clone() }))),
            versions: Arc::new(VersionService::new(Arc::new(SeaOrmVersionRepository { db }))),
            authenticator: Arc::new(TokenAuthenticator::new(&auth)),
            issuer: Arc::new(TokenIssuer::new(auth)),
            stall: Arc::new(RandomStall::new(cfg.server.stall_probability)),
            request_timeout: cfg.server.request_timeout(),
        }
    }

    pub fn with_stall_policy(mut self, stall: Arc<dyn StallPolicy>) -> Self {
        self.stall = stall;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// Route layer: require a valid `Authorization: Bearer <token>` and stash
/// the claims in the request extensions. Any failure answers 401.
pub async fn require_bearer_token_state(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Response {
    let header = req.headers().get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    match state.authenticator.authenticate(header) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(e) => {
            warn!(path = %req.uri().path(), code = e.code(), error = %e, "request rejected");
            JsonApiError::unauthorized().into_response()
        }
    }
}
