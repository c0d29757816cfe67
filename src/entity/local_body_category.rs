//! LocalBodyCategory entity: externally curated quality label per local body.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "local_body_categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub local_body_id: i64,
    pub category: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::local_body::Entity",
        from = "Column::LocalBodyId",
        to = "super::local_body::Column::Id"
    )]
    LocalBody,
}

impl Related<super::local_body::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LocalBody.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
