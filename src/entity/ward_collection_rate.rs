//! WardCollectionRate entity: one monthly HKS collection-rate row per
//! (ward, period). Rows are appended by official updates, never deleted.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ward_collection_rates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub collection_id: i64,
    pub ward_id: i64,
    /// Zero-padded `YYYY-MM` or `YYYY-MM-DD`, sortable by string comparison.
    pub year_month: String,
    pub rate: f32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::ward::Entity",
        from = "Column::WardId",
        to = "super::ward::Column::Id"
    )]
    Ward,
}

impl Related<super::ward::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ward.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
