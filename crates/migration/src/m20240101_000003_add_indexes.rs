use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Versions are always listed and fetched through their service
        manager
            .create_index(
                Index::create()
                    .name("idx_service_versions_service")
                    .table(ServiceVersions::Table)
                    .col(ServiceVersions::ServiceId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_service_versions_service")
                    .table(ServiceVersions::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum ServiceVersions {
    Table,
    ServiceId,
}
