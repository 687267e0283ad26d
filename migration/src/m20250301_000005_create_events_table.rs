use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Events::Table)
                    .if_not_exists()
                    .col(pk_auto(Events::Id))
                    .col(string(Events::Name))
                    .col(date(Events::StartDate))
                    .col(date(Events::EndDate))
                    .col(string(Events::MeetingPoint))
                    .col(string(Events::Location))
                    .col(string(Events::Cost))
                    .col(text(Events::AdditionalInfo))
                    .col(big_integer(Events::Version).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Events::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Events {
    Table,
    Id,
    Name,
    StartDate,
    EndDate,
    MeetingPoint,
    Location,
    Cost,
    AdditionalInfo,
    Version,
}
