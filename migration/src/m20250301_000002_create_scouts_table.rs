use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Scouts::Table)
                    .if_not_exists()
                    .col(pk_auto(Scouts::Id))
                    .col(string(Scouts::Name))
                    .col(date(Scouts::BirthDate))
                    .col(string(Scouts::Address))
                    .col(string(Scouts::PhoneNumber))
                    .col(string(Scouts::HealthInsurance))
                    .col(string(Scouts::AllergyInfo))
                    .col(string(Scouts::VaccinationInfo))
                    .col(date(Scouts::LastUpdated))
                    .col(big_integer(Scouts::Version).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Scouts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Scouts {
    Table,
    Id,
    Name,
    BirthDate,
    Address,
    PhoneNumber,
    HealthInsurance,
    AllergyInfo,
    VaccinationInfo,
    LastUpdated,
    Version,
}
