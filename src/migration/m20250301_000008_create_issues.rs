//! Create issues table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Issue::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Issue::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Issue::LocalBodyId).big_integer().not_null())
                    .col(ColumnDef::new(Issue::IssueType).string().not_null())
                    .col(ColumnDef::new(Issue::Description).text().not_null())
                    .col(ColumnDef::new(Issue::ImageUrl).string())
                    .col(ColumnDef::new(Issue::LocationUrl).string())
                    .col(
                        ColumnDef::new(Issue::Resolved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Issue::TownId).big_integer())
                    .col(
                        ColumnDef::new(Issue::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_issues_local_body_id")
                    .table(Issue::Table)
                    .col(Issue::LocalBodyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_issues_created_at")
                    .table(Issue::Table)
                    .col(Issue::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Issue::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Issue {
    #[sea_orm(iden = "issues")]
    Table,
    Id,
    LocalBodyId,
    IssueType,
    Description,
    ImageUrl,
    LocationUrl,
    Resolved,
    TownId,
    CreatedAt,
}
