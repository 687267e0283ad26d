use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "scout_contacts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub scout_id: i32,
    /// Position of the contact in the scout's contact list, starting at 0.
    #[sea_orm(primary_key, auto_increment = false)]
    pub contact_order: i32,
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub relationship: String,
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
}

impl Related<super::scout::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Scout.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
