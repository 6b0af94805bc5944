//! Create `ads` table.
//!
//! `id` is an AUTOINCREMENT rowid so identifiers of deleted ads are never handed out again.
//! `created_at` holds an ISO-8601 string written by the service layer.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ads::Table)
                    .if_not_exists()
                    .col(pk_auto(Ads::Id))
                    .col(text(Ads::Title).not_null())
                    .col(text(Ads::Description).not_null())
                    .col(text(Ads::CreatedAt).not_null())
                    .col(text(Ads::Owner).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Ads::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Ads { Table, Id, Title, Description, CreatedAt, Owner }
