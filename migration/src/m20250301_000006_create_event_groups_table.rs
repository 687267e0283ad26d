use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_groups_table::Groups, m20250301_000005_create_events_table::Events,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventGroups::Table)
                    .if_not_exists()
                    .col(integer(EventGroups::EventId))
                    .col(integer(EventGroups::GroupId))
                    .primary_key(
                        Index::create()
                            .col(EventGroups::EventId)
                            .col(EventGroups::GroupId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_groups_event_id")
                            .from(EventGroups::Table, EventGroups::EventId)
                            .to(Events::Table, Events::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_groups_group_id")
                            .from(EventGroups::Table, EventGroups::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Reverse lookup for events of a group
        manager
            .create_index(
                Index::create()
                    .name("idx_event_groups_group_id")
                    .table(EventGroups::Table)
                    .col(EventGroups::GroupId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_event_groups_group_id")
                    .table(EventGroups::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(EventGroups::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventGroups {
    Table,
    EventId,
    GroupId,
}
