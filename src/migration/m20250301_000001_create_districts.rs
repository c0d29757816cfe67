//! Create districts table.
//!
//! Hierarchy ids come from the external civic dataset, so primary keys are
//! plain bigints and no foreign key constraints are declared anywhere in the
//! hierarchy: a sync must never be rejected for an orphan row.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(District::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(District::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(District::NameEn).string().not_null())
                    .col(ColumnDef::new(District::NameMl).string())
                    .col(
                        ColumnDef::new(District::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(District::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum District {
    #[sea_orm(iden = "districts")]
    Table,
    Id,
    NameEn,
    NameMl,
    IsActive,
}
