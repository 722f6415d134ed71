use std::sync::Arc;

use models::service_version;
use tracing::{info, instrument};
use uuid::Uuid;

use super::domain::{CreateVersionInput, UpdateVersionInput};
use super::repository::VersionRepository;
use crate::errors::ServiceError;

/// Application service for versions of a catalog entry.
///
/// The parent service is never looked up: a version may name a service that
/// does not exist, and deleting a service leaves its versions behind.
pub struct VersionService<R: VersionRepository> {
    repo: Arc<R>,
}

impl<R: VersionRepository> VersionService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Create a version under `service_id`. A blank `service_id` creates
    /// nothing and yields `None`.
    #[instrument(skip(self, input), fields(service_id = %service_id))]
    pub async fn create(
        &self,
        service_id: &str,
        input: CreateVersionInput,
    ) -> Result<Option<service_version::Model>, ServiceError> {
        if service_id.trim().is_empty() {
            return Ok(None);
        }
        let version = input.version.unwrap_or_default();
        service_version::validate_version(&version)?;

        let id = Uuid::now_v7().to_string();
        let now = chrono::Utc::now().into();
        self.repo
            .insert(service_version::Model {
                id: id.clone(),
                service_id: service_id.to_string(),
                version,
                created_at: now,
                updated_at: now,
            })
            .await?;
        let stored = self
            .repo
            .find(service_id, &id)
            .await?
            .ok_or_else(|| ServiceError::Db(format!("version {id} missing after insert")))?;
        info!(version_id = %stored.id, "version_created");
        Ok(Some(stored))
    }

    pub async fn list(&self, service_id: &str) -> Result<Vec<service_version::Model>, ServiceError> {
        self.repo.list(service_id).await
    }

    pub async fn get(&self, service_id: &str, id: &str) -> Result<Option<service_version::Model>, ServiceError> {
        if service_id.trim().is_empty() || id.trim().is_empty() {
            return Ok(None);
        }
        self.repo.find(service_id, id).await
    }

    /// Update a version. The row is re-keyed under a new id and both
    /// timestamps are restamped; callers must use the returned id.
    #[instrument(skip(self, input), fields(service_id = %service_id, version_id = %id))]
    pub async fn update(
        &self,
        service_id: &str,
        id: &str,
        input: UpdateVersionInput,
    ) -> Result<service_version::Model, ServiceError> {
        if let Some(v) = &input.version {
            service_version::validate_version(v)?;
        }

        let new_id = Uuid::now_v7().to_string();
        let touched = self
            .repo
            .update(service_id, id, &new_id, input.version_change(), chrono::Utc::now().into())
            .await?;
        if touched == 0 {
            return Err(ServiceError::not_found("Service version"));
        }
        let stored = self
            .repo
            .find(service_id, &new_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Service version"))?;
        info!(new_version_id = %stored.id, "version_updated");
        Ok(stored)
    }

    pub async fn delete(&self, service_id: &str, id: &str) -> Result<u64, ServiceError> {
        let removed = self.repo.delete(service_id, id).await?;
        info!(service_id = %service_id, version_id = %id, removed, "version_deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::test_support::get_db;
    use crate::versions::SeaOrmVersionRepository;

    async fn svc() -> VersionService<SeaOrmVersionRepository> {
        let db = get_db().await.expect("db");
        VersionService::new(Arc::new(SeaOrmVersionRepository { db }))
    }

    fn label(v: &str) -> CreateVersionInput {
        CreateVersionInput { version: Some(v.into()) }
    }

    #[tokio::test]
    async fn create_under_unknown_service_is_allowed() {
        let svc = svc().await;
        let created = svc.create("no-such-service", label("v1.0")).await.unwrap().unwrap();
        assert_eq!(created.service_id, "no-such-service");
        assert_eq!(created.version, "v1.0");
        assert_eq!(svc.list("no-such-service").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn blank_service_id_is_a_no_op() {
        let svc = svc().await;
        assert!(svc.create("", label("v1.0")).await.unwrap().is_none());
        assert!(svc.list("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn version_length_is_bounded_on_create_and_update() {
        let svc = svc().await;
        let err = svc.create("svc", label(&"v".repeat(17))).await.unwrap_err();
        assert_eq!(err.public_message(), Some("Version cannot be longer than 16 characters"));

        let created = svc.create("svc", label(&"v".repeat(16))).await.unwrap().unwrap();
        let err = svc
            .update("svc", &created.id, UpdateVersionInput { version: Some("v".repeat(17)) })
            .await
            .unwrap_err();
        assert_eq!(err.public_message(), Some("Version cannot be longer than 16 characters"));
        assert!(svc.get("svc", &created.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn get_requires_both_ids_to_match() {
        let svc = svc().await;
        let created = svc.create("svc-a", label("v1.0")).await.unwrap().unwrap();
        assert!(svc.get("svc-a", &created.id).await.unwrap().is_some());
        assert!(svc.get("svc-b", &created.id).await.unwrap().is_none());
        assert!(svc.get("svc-a", "").await.unwrap().is_none());
        assert!(svc.get("", &created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_rotates_id_and_restamps() {
        let svc = svc().await;
        let created = svc.create("svc", label("v1.0")).await.unwrap().unwrap();
        tokio::time::sleep(Duration::from_millis(10)).await;

        let updated = svc
            .update("svc", &created.id, UpdateVersionInput { version: Some("v2.0".into()) })
            .await
            .unwrap();
        assert_ne!(updated.id, created.id);
        assert_eq!(updated.version, "v2.0");
        assert!(updated.created_at > created.created_at);
        assert!(svc.get("svc", &created.id).await.unwrap().is_none());

        let ids: Vec<_> = svc.list("svc").await.unwrap().into_iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![updated.id.clone()]);

        let kept = svc.update("svc", &updated.id, UpdateVersionInput { version: Some(" ".into()) }).await.unwrap();
        assert_eq!(kept.version, "v2.0");
        assert_ne!(kept.id, updated.id);
    }

    #[tokio::test]
    async fn update_unknown_pair_is_not_found() {
        let svc = svc().await;
        let created = svc.create("svc", label("v1.0")).await.unwrap().unwrap();
        let err = svc.update("other", &created.id, UpdateVersionInput::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "Service version not found"));
    }

    #[tokio::test]
    async fn delete_is_idempotent_and_scoped() {
        let svc = svc().await;
        let created = svc.create("svc", label("v1.0")).await.unwrap().unwrap();
        assert_eq!(svc.delete("other", &created.id).await.unwrap(), 0);
        assert_eq!(svc.delete("svc", &created.id).await.unwrap(), 1);
        assert_eq!(svc.delete("svc", &created.id).await.unwrap(), 0);
    }
}
