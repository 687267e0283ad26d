use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub start_date: Date,
    pub end_date: Date,
    pub meeting_point: String,
    pub location: String,
    pub cost: String,
    #[sea_orm(column_type = "Text")]
    pub additional_info: String,
    pub version: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event_group::Entity")]
    EventGroup,
    #[sea_orm(has_many = "super::registration::Entity")]
    Registration,
}

impl Related<super::event_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventGroup.def()
    }
}

impl Related<super::registration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Registration.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
