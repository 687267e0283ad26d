use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "scouts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub birth_date: Date,
    pub address: String,
    pub phone_number: String,
    pub health_insurance: String,
    pub allergy_info: String,
    pub vaccination_info: String,
    pub last_updated: Date,
    pub version: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::scout_contact::Entity")]
    ScoutContact,
    #[sea_orm(has_many = "super::scout_group::Entity")]
    ScoutGroup,
    #[sea_orm(has_many = "super::registration::Entity")]
    Registration,
}

impl Related<super::scout_contact::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScoutContact.def()
    }
}

impl Related<super::scout_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScoutGroup.def()
    }
}

impl Related<super::registration::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Registration.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
