//! Create the three category tables (district, assembly, local body).
//!
//! Category rows are curated outside this system; a missing row means the
//! entity renders as "Normal".

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DistrictCategory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DistrictCategory::DistrictId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DistrictCategory::Category)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AssemblyCategory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssemblyCategory::AssemblyId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AssemblyCategory::Category)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LocalBodyCategory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LocalBodyCategory::LocalBodyId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LocalBodyCategory::Category)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LocalBodyCategory::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AssemblyCategory::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DistrictCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DistrictCategory {
    #[sea_orm(iden = "district_categories")]
    Table,
    DistrictId,
    Category,
}

#[derive(DeriveIden)]
pub enum AssemblyCategory {
    #[sea_orm(iden = "assembly_categories")]
    Table,
    AssemblyId,
    Category,
}

#[derive(DeriveIden)]
pub enum LocalBodyCategory {
    #[sea_orm(iden = "local_body_categories")]
    Table,
    LocalBodyId,
    Category,
}
