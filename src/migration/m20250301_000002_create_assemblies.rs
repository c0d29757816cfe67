//! Create assemblies table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assembly::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assembly::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assembly::NameEn).string().not_null())
                    .col(ColumnDef::new(Assembly::NameMl).string())
                    .col(ColumnDef::new(Assembly::DistrictId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Assembly::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_assemblies_district_id")
                    .table(Assembly::Table)
                    .col(Assembly::DistrictId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assembly::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Assembly {
    #[sea_orm(iden = "assemblies")]
    Table,
    Id,
    NameEn,
    NameMl,
    DistrictId,
    IsActive,
}
