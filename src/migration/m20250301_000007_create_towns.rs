//! Create towns table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Town::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Town::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Town::NameEn).string().not_null())
                    .col(ColumnDef::new(Town::NameMl).string())
                    .col(ColumnDef::new(Town::LocalBodyId).big_integer().not_null())
                    .col(ColumnDef::new(Town::Lat).double().not_null())
                    .col(ColumnDef::new(Town::Lng).double().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_towns_local_body_id")
                    .table(Town::Table)
                    .col(Town::LocalBodyId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Town::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Town {
    #[sea_orm(iden = "towns")]
    Table,
    Id,
    NameEn,
    NameMl,
    LocalBodyId,
    Lat,
    Lng,
}
