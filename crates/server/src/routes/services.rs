use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::{Item, Items};
use models::service as service_entity;
use service::catalog::domain::{CreateServiceInput, UpdateServiceInput};
use tracing::info;

use crate::{errors::JsonApiError, extract::JsonPayload, routes::auth::ServerState};

pub async fn create(
    State(state): State<ServerState>,
    JsonPayload(input): JsonPayload<CreateServiceInput>,
) -> Result<(StatusCode, Json<Item<service_entity::Model>>), JsonApiError> {
    let created = state.catalog.create(input).await?;
    Ok((StatusCode::CREATED, Json(Item::new(created))))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Items<service_entity::Model>>, JsonApiError> {
    let items = state.catalog.list().await?;
    info!(count = items.len(), "list services");
    Ok(Json(Items::new(items)))
}

/// A missing service answers 200 with an empty body.
pub async fn get(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Response, JsonApiError> {
    match state.catalog.get(&id).await? {
        Some(found) => Ok(Json(Item::new(found)).into_response()),
        None => {
            info!(service_id = %id, "service not found");
            Ok(StatusCode::OK.into_response())
        }
    }
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    JsonPayload(input): JsonPayload<UpdateServiceInput>,
) -> Result<Json<Item<service_entity::Model>>, JsonApiError> {
    let updated = state.catalog.update(&id, input).await?;
    Ok(Json(Item::new(updated)))
}

pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Result<StatusCode, JsonApiError> {
    state.catalog.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
