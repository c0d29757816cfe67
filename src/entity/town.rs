//! Town entity, a named settlement within a local body.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "towns")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub name_en: String,
    pub name_ml: Option<String>,
    pub local_body_id: i64,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::local_body::Entity",
        from = "Column::LocalBodyId",
        to = "super::local_body::Column::Id"
    )]
    LocalBody,
    #[sea_orm(has_many = "super::issue::Entity")]
    Issues,
}

impl Related<super::local_body::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LocalBody.def()
    }
}

impl Related<super::issue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Issues.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
