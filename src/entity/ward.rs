//! Ward entity, the smallest subdivision of a local body.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "wards")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub ward_no: i32,
    pub name_en: String,
    pub name_ml: Option<String>,
    pub local_body_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::local_body::Entity",
        from = "Column::LocalBodyId",
        to = "super::local_body::Column::Id"
    )]
    LocalBody,
    #[sea_orm(has_many = "super::ward_collection_rate::Entity")]
    CollectionRates,
}

impl Related<super::local_body::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LocalBody.def()
    }
}

impl Related<super::ward_collection_rate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CollectionRates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
