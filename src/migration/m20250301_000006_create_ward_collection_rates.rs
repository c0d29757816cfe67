//! Create ward_collection_rates table.
//!
//! One row per (ward, period); the unique index backs the single-row
//! upsert used by the official rate-update action.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WardCollectionRate::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WardCollectionRate::CollectionId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(WardCollectionRate::WardId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WardCollectionRate::YearMonth)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(WardCollectionRate::Rate).float().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ward_collection_rates_ward_period")
                    .table(WardCollectionRate::Table)
                    .col(WardCollectionRate::WardId)
                    .col(WardCollectionRate::YearMonth)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WardCollectionRate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WardCollectionRate {
    #[sea_orm(iden = "ward_collection_rates")]
    Table,
    CollectionId,
    WardId,
    YearMonth,
    Rate,
}
