//! Create local_body_types table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LocalBodyType::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LocalBodyType::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LocalBodyType::NameEn).string().not_null())
                    .col(ColumnDef::new(LocalBodyType::NameMl).string())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LocalBodyType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LocalBodyType {
    #[sea_orm(iden = "local_body_types")]
    Table,
    Id,
    NameEn,
    NameMl,
}
