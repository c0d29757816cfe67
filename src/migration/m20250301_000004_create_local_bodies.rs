//! Create local_bodies table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LocalBody::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LocalBody::Id)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(LocalBody::NameEn).string().not_null())
                    .col(ColumnDef::new(LocalBody::NameMl).string())
                    .col(
                        ColumnDef::new(LocalBody::AssemblyId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(LocalBody::TypeId).big_integer())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_local_bodies_assembly_id")
                    .table(LocalBody::Table)
                    .col(LocalBody::AssemblyId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LocalBody::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LocalBody {
    #[sea_orm(iden = "local_bodies")]
    Table,
    Id,
    NameEn,
    NameMl,
    AssemblyId,
    TypeId,
}
