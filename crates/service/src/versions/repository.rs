use async_trait::async_trait;
use models::service_version;
use sea_orm::{
    prelude::DateTimeWithTimeZone, sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::errors::ServiceError;

#[async_trait]
pub trait VersionRepository: Send + Sync {
    async fn insert(&self, row: service_version::Model) -> Result<(), ServiceError>;
    async fn find(&self, service_id: &str, id: &str) -> Result<Option<service_version::Model>, ServiceError>;
    async fn list(&self, service_id: &str) -> Result<Vec<service_version::Model>, ServiceError>;
    /// Move the row to `new_id`, optionally relabel it and restamp both
    /// timestamps; returns the rows touched.
    async fn update(
        &self,
        service_id: &str,
        id: &str,
        new_id: &str,
        version: Option<&str>,
        at: DateTimeWithTimeZone,
    ) -> Result<u64, ServiceError>;
    async fn delete(&self, service_id: &str, id: &str) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmVersionRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl VersionRepository for SeaOrmVersionRepository {
    async fn insert(&self, row: service_version::Model) -> Result<(), ServiceError> {
        service_version::Entity::insert(row.into_active_model())
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn find(&self, service_id: &str, id: &str) -> Result<Option<service_version::Model>, ServiceError> {
        Ok(service_version::Entity::find()
            .filter(service_version::Column::ServiceId.eq(service_id))
            .filter(service_version::Column::Id.eq(id))
            .one(&self.db)
            .await?)
    }

    async fn list(&self, service_id: &str) -> Result<Vec<service_version::Model>, ServiceError> {
        Ok(service_version::Entity::find()
            .filter(service_version::Column::ServiceId.eq(service_id))
            .all(&self.db)
            .await?)
    }

    async fn update(
        &self,
        service_id: &str,
        id: &str,
        new_id: &str,
        version: Option<&str>,
        at: DateTimeWithTimeZone,
    ) -> Result<u64, ServiceError> {
        let mut stmt = service_version::Entity::update_many()
            .col_expr(service_version::Column::Id, Expr::value(new_id))
            .col_expr(service_version::Column::CreatedAt, Expr::value(at))
            .col_expr(service_version::Column::UpdatedAt, Expr::value(at))
            .filter(service_version::Column::ServiceId.eq(service_id))
            .filter(service_version::Column::Id.eq(id));
        if let Some(version) = version {
            stmt = stmt.col_expr(service_version::Column::Version, Expr::value(version));
        }
        let res = stmt.exec(&self.db).await?;
        Ok(res.rows_affected)
    }

    async fn delete(&self, service_id: &str, id: &str) -> Result<u64, ServiceError> {
        let res = service_version::Entity::delete_many()
            .filter(service_version::Column::ServiceId.eq(service_id))
            .filter(service_version::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected)
    }
}
