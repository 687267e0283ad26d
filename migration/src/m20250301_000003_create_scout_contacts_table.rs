use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_scouts_table::Scouts;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScoutContacts::Table)
                    .if_not_exists()
                    .col(integer(ScoutContacts::ScoutId))
                    .col(integer(ScoutContacts::ContactOrder))
                    .col(string(ScoutContacts::Name))
                    .col(string(ScoutContacts::PhoneNumber))
                    .col(string(ScoutContacts::Email))
                    .col(string(ScoutContacts::Relationship))
                    .primary_key(
                        Index::create()
                            .col(ScoutContacts::ScoutId)
                            .col(ScoutContacts::ContactOrder),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scout_contacts_scout_id")
                            .from(ScoutContacts::Table, ScoutContacts::ScoutId)
                            .to(Scouts::Table, Scouts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ScoutContacts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ScoutContacts {
    Table,
    ScoutId,
    ContactOrder,
    Name,
    PhoneNumber,
    Email,
    Relationship,
}
