use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "registrations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub scout_id: i32,
    pub event_id: i32,
    #[sea_orm(column_type = "Text")]
    pub note: String,
    /// Upper-case status name: `PENDING`, `CONFIRMED` or `CANCELLED`.
    pub status: String,
    pub registration_date: DateTime,
    pub account_id: String,
    pub version: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::scout::Entity",
        from = "Column::ScoutId",
        to = "super::scout::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Scout,
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Event,
}

impl Related<super::scout::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scout.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
