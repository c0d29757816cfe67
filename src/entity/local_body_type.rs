//! LocalBodyType entity (panchayat, municipality, corporation labels).

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "local_body_types")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub name_en: String,
    pub name_ml: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::local_body::Entity")]
    LocalBodies,
}

impl Related<super::local_body::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LocalBodies.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
