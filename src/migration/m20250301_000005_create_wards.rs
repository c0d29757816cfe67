//! Create wards table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ward::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ward::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Ward::WardNo).integer().not_null())
                    .col(ColumnDef::new(Ward::NameEn).string().not_null())
                    .col(ColumnDef::new(Ward::NameMl).string())
                    .col(ColumnDef::new(Ward::LocalBodyId).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_wards_local_body_id")
                    .table(Ward::Table)
                    .col(Ward::LocalBodyId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ward::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ward {
    #[sea_orm(iden = "wards")]
    Table,
    Id,
    WardNo,
    NameEn,
    NameMl,
    LocalBodyId,
}
