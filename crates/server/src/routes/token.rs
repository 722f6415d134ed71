use axum::{extract::State, Json};
use common::TokenBody;
use service::auth::domain::Credentials;

use crate::{errors::JsonApiError, extract::JsonPayload, routes::auth::ServerState};

/// `POST /v1/token`
pub async fn create_token(
    State(state): State<ServerState>,
    JsonPayload(creds): JsonPayload<Credentials>,
) -> Result<Json<TokenBody>, JsonApiError> {
    let token = state.issuer.issue(&creds)?;
    Ok(Json(TokenBody { token }))
}
