//! Create `services` table.
//!
//! Length limits live in CHECK constraints so they hold on SQLite too, where
//! VARCHAR lengths are not enforced.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(string_len(Services::Id, 64).primary_key())
                    .col(string_len_null(Services::Name, 64).check(Expr::cust("length(name) <= 64")))
                    .col(
                        string_len(Services::Description, 255)
                            .check(Expr::cust("length(description) <= 255")),
                    )
                    .col(timestamp_with_time_zone(Services::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Services::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Services::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Services {
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}
