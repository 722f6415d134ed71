use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::{Item, Items};
use models::service_version;
use service::{
    stall::wait_for_deadline,
    versions::domain::{CreateVersionInput, UpdateVersionInput},
};
use tracing::{info, warn};

use crate::{errors::JsonApiError, extract::JsonPayload, routes::auth::ServerState};

const NOT_FOUND: &str = "Service version not found";

pub async fn create(
    State(state): State<ServerState>,
    Path(service_id): Path<String>,
    JsonPayload(input): JsonPayload<CreateVersionInput>,
) -> Result<Response, JsonApiError> {
    create_for(&state, &service_id, input).await
}

/// `POST /v1/services//versions`: validated, then nothing is stored.
pub async fn create_without_service(
    State(state): State<ServerState>,
    JsonPayload(input): JsonPayload<CreateVersionInput>,
) -> Result<Response, JsonApiError> {
    create_for(&state, "", input).await
}

async fn create_for(state: &ServerState, service_id: &str, input: CreateVersionInput) -> Result<Response, JsonApiError> {
    match state.versions.create(service_id, input).await? {
        Some(created) => Ok((StatusCode::CREATED, Json(Item::new(created))).into_response()),
        None => {
            info!("version create without service id ignored");
            Ok(StatusCode::OK.into_response())
        }
    }
}

pub async fn list(
    State(state): State<ServerState>,
    Path(service_id): Path<String>,
) -> Result<Json<Items<service_version::Model>>, JsonApiError> {
    let items = state.versions.list(&service_id).await?;
    info!(service_id = %service_id, count = items.len(), "list versions");
    Ok(Json(Items::new(items)))
}

pub async fn get(
    State(state): State<ServerState>,
    Path((service_id, version_id)): Path<(String, String)>,
) -> Result<Json<Item<service_version::Model>>, JsonApiError> {
    state
        .versions
        .get(&service_id, &version_id)
        .await?
        .map(|v| Json(Item::new(v)))
        .ok_or_else(|| JsonApiError::not_found(NOT_FOUND))
}

/// Routes where one of the ids is an empty path segment.
pub async fn not_found() -> JsonApiError {
    JsonApiError::not_found(NOT_FOUND)
}

pub async fn update(
    State(state): State<ServerState>,
    Path((service_id, version_id)): Path<(String, String)>,
    JsonPayload(input): JsonPayload<UpdateVersionInput>,
) -> Result<Json<Item<service_version::Model>>, JsonApiError> {
    let updated = state.versions.update(&service_id, &version_id, input).await?;
    Ok(Json(Item::new(updated)))
}

/// Idempotent delete. When the stall policy fires the request waits out its
/// deadline and answers 504 without deleting.
pub async fn delete(
    State(state): State<ServerState>,
    Path((service_id, version_id)): Path<(String, String)>,
) -> Result<StatusCode, JsonApiError> {
    if state.stall.should_stall() {
        warn!(service_id = %service_id, version_id = %version_id, timeout = ?state.request_timeout, "stalling version delete");
        wait_for_deadline(state.request_timeout).await;
        return Err(JsonApiError::timed_out());
    }
    state.versions.delete(&service_id, &version_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
