use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000002_create_scouts_table::Scouts, m20250301_000005_create_events_table::Events,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Registrations::Table)
                    .if_not_exists()
                    .col(pk_auto(Registrations::Id))
                    .col(integer(Registrations::ScoutId))
                    .col(integer(Registrations::EventId))
                    .col(text(Registrations::Note))
                    .col(string(Registrations::Status))
                    .col(date_time(Registrations::RegistrationDate))
                    .col(string(Registrations::AccountId))
                    .col(big_integer(Registrations::Version).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_registrations_scout_id")
                            .from(Registrations::Table, Registrations::ScoutId)
                            .to(Scouts::Table, Scouts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_registrations_event_id")
                            .from(Registrations::Table, Registrations::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One registration per scout and event
        manager
            .create_index(
                Index::create()
                    .name("idx_registrations_event_scout")
                    .table(Registrations::Table)
                    .col(Registrations::EventId)
                    .col(Registrations::ScoutId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_registrations_scout_id")
                    .table(Registrations::Table)
                    .col(Registrations::ScoutId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_registrations_scout_id")
                    .table(Registrations::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_registrations_event_scout")
                    .table(Registrations::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Registrations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Registrations {
    Table,
    Id,
    ScoutId,
    EventId,
    Note,
    Status,
    RegistrationDate,
    AccountId,
    Version,
}
