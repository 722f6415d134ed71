use async_trait::async_trait;
use models::service;
use sea_orm::{
    prelude::DateTimeWithTimeZone, sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use super::domain::ServiceChange;
use crate::errors::ServiceError;

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn insert(&self, row: service::Model) -> Result<(), ServiceError>;
    async fn find(&self, id: &str) -> Result<Option<service::Model>, ServiceError>;
    async fn list(&self) -> Result<Vec<service::Model>, ServiceError>;
    /// Apply `changes` and stamp `updated_at`; returns the rows touched.
    async fn update(&self, id: &str, changes: &[ServiceChange], at: DateTimeWithTimeZone) -> Result<u64, ServiceError>;
    async fn delete(&self, id: &str) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmServiceRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ServiceRepository for SeaOrmServiceRepository {
    async fn insert(&self, row: service::Model) -> Result<(), ServiceError> {
        service::Entity::insert(row.into_active_model())
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Option<service::Model>, ServiceError> {
        Ok(service::Entity::find_by_id(id.to_string()).one(&self.db).await?)
    }

    async fn list(&self) -> Result<Vec<service::Model>, ServiceError> {
        Ok(service::Entity::find().all(&self.db).await?)
    }

    async fn update(&self, id: &str, changes: &[ServiceChange], at: DateTimeWithTimeZone) -> Result<u64, ServiceError> {
        let mut stmt = service::Entity::update_many()
            .col_expr(service::Column::UpdatedAt, Expr::value(at))
            .filter(service::Column::Id.eq(id));
        for change in changes {
            stmt = match change {
                ServiceChange::Name(name) => stmt.col_expr(service::Column::Name, Expr::value(name.clone())),
                ServiceChange::Description(d) => stmt.col_expr(service::Column::Description, Expr::value(d.clone())),
            };
        }
        let res = stmt.exec(&self.db).await?;
        Ok(res.rows_affected)
    }

    async fn delete(&self, id: &str) -> Result<u64, ServiceError> {
        let res = service::Entity::delete_by_id(id.to_string()).exec(&self.db).await?;
        Ok(res.rows_affected)
    }
}
