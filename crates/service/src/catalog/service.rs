use std::sync::Arc;

use models::{service, Nullable};
use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{CreateServiceInput, UpdateServiceInput};
use super::repository::ServiceRepository;
use crate::errors::ServiceError;

/// Application service encapsulating the catalog entry rules.
pub struct CatalogService<R: ServiceRepository> {
    repo: Arc<R>,
}

impl<R: ServiceRepository> CatalogService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Create a service under a fresh time-ordered id and return the stored row.
    ///
    /// The name must be present and not blank. A blank description is
    /// replaced by [`service::DEFAULT_DESCRIPTION`].
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: CreateServiceInput) -> Result<service::Model, ServiceError> {
        let name = match input.name {
            Nullable::Value(name) => name,
            Nullable::Absent | Nullable::Null => {
                return Err(ServiceError::Validation("Service name is required".into()))
            }
        };
        service::validate_name(&name)?;
        let description = service::description_or_default(input.description.as_deref());
        service::validate_description(&description)?;

        let id = Uuid::now_v7().to_string();
        let now = chrono::Utc::now().into();
        self.repo
            .insert(service::Model {
                id: id.clone(),
                name: Some(name),
                description,
                created_at: now,
                updated_at: now,
            })
            .await?;
        let stored = self
            .repo
            .find(&id)
            .await?
            .ok_or_else(|| ServiceError::Db(format!("service {id} missing after insert")))?;
        info!(service_id = %stored.id, "service_created");
        Ok(stored)
    }

    pub async fn list(&self) -> Result<Vec<service::Model>, ServiceError> { self.repo.list().await }

    pub async fn get(&self, id: &str) -> Result<Option<service::Model>, ServiceError> { self.repo.find(id).await }

    /// Apply the present, non-blank fields. `updated_at` moves even when no
    /// field changes.
    #[instrument(skip(self, input), fields(service_id = %id))]
    pub async fn update(&self, id: &str, input: UpdateServiceInput) -> Result<service::Model, ServiceError> {
        if let Some(name) = input.name.as_value().filter(|n| !n.trim().is_empty()) {
            service::validate_name(name)?;
        }
        if let Some(d) = &input.description {
            service::validate_description(d)?;
        }

        let changes = input.changes();
        let touched = self.repo.update(id, &changes, chrono::Utc::now().into()).await?;
        if touched == 0 {
            return Err(ServiceError::not_found("Service"));
        }
        let stored = self.repo.find(id).await?.ok_or_else(|| ServiceError::not_found("Service"))?;
        info!(fields = changes.len(), "service_updated");
        Ok(stored)
    }

    /// Remove a service; its versions are left in place. Returns rows removed.
    pub async fn delete(&self, id: &str) -> Result<u64, ServiceError> {
        let removed = self.repo.delete(id).await?;
        info!(service_id = %id, removed, "service_deleted");
        Ok(removed)
    }
}
