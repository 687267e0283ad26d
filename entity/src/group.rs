use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "groups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub version: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::scout_group::Entity")]
    ScoutGroup,
    #[sea_orm(has_many = "super::event_group::Entity")]
    EventGroup,
}

impl Related<super::scout_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScoutGroup.def()
    }
}

impl Related<super::event_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
