//! Create `service_versions` table.
//!
//! `service_id` points at `services.id` but carries no FOREIGN KEY
//! constraint: versions may reference unknown services and outlive the
//! service they belong to.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceVersions::Table)
                    .if_not_exists()
                    .col(string_len(ServiceVersions::Id, 64).primary_key())
                    .col(string_len(ServiceVersions::ServiceId, 64).not_null())
                    .col(
                        string_len(ServiceVersions::Version, 16)
                            .not_null()
                            .check(Expr::cust("length(version) <= 16")),
                    )
                    .col(timestamp_with_time_zone(ServiceVersions::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(ServiceVersions::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceVersions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ServiceVersions {
    Table,
    Id,
    ServiceId,
    Version,
    CreatedAt,
    UpdatedAt,
}
