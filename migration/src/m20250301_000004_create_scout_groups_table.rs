use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000001_create_groups_table::Groups, m20250301_000002_create_scouts_table::Scouts,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ScoutGroups::Table)
                    .if_not_exists()
                    .col(integer(ScoutGroups::ScoutId))
                    .col(integer(ScoutGroups::GroupId))
                    .primary_key(
                        Index::create()
                            .col(ScoutGroups::ScoutId)
                            .col(ScoutGroups::GroupId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scout_groups_scout_id")
                            .from(ScoutGroups::Table, ScoutGroups::ScoutId)
                            .to(Scouts::Table, Scouts::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_scout_groups_group_id")
                            .from(ScoutGroups::Table, ScoutGroups::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ScoutGroups::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ScoutGroups {
    Table,
    ScoutId,
    GroupId,
}
