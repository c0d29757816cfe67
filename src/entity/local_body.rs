//! LocalBody entity (panchayat / municipality / corporation).

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "local_bodies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub name_en: String,
    pub name_ml: Option<String>,
    pub assembly_id: i64,
    pub type_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assembly::Entity",
        from = "Column::AssemblyId",
        to = "super::assembly::Column::Id"
    )]
    Assembly,
    #[sea_orm(
        belongs_to = "super::local_body_type::Entity",
        from = "Column::TypeId",
        to = "super::local_body_type::Column::Id"
    )]
    LocalBodyType,
    #[sea_orm(has_many = "super::ward::Entity")]
    Wards,
    #[sea_orm(has_many = "super::town::Entity")]
    Towns,
    #[sea_orm(has_many = "super::issue::Entity")]
    Issues,
    #[sea_orm(has_one = "super::local_body_category::Entity")]
    Category,
}

impl Related<super::assembly::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assembly.def()
    }
}

impl Related<super::local_body_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LocalBodyType.def()
    }
}

impl Related<super::ward::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wards.def()
    }
}

impl Related<super::town::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Towns.def()
    }
}

impl Related<super::issue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Issues.def()
    }
}

impl Related<super::local_body_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
