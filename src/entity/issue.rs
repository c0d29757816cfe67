//! Issue entity for citizen-reported civic issues.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "issues")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub local_body_id: i64,
    pub issue_type: String,
    pub description: String,
    pub image_url: Option<String>,
    pub location_url: Option<String>,
    pub resolved: bool,
    pub town_id: Option<i64>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::local_body::Entity",
        from = "Column::LocalBodyId",
        to = "super::local_body::Column::Id"
    )]
    LocalBody,
    #[sea_orm(
        belongs_to = "super::town::Entity",
        from = "Column::TownId",
        to = "super::town::Column::Id"
    )]
    Town,
}

impl Related<super::local_body::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LocalBody.def()
    }
}

impl Related<super::town::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Town.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
