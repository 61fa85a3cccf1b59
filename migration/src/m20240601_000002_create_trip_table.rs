use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trip::Table)
                    .if_not_exists()
                    .col(pk_auto(Trip::IdTrip))
                    .col(string_len(Trip::Name, 100))
                    .col(string_len(Trip::Description, 1000))
                    .col(timestamp_with_time_zone(Trip::DateFrom))
                    .col(timestamp_with_time_zone(Trip::DateTo))
                    .col(integer(Trip::MaxPeople))
                    .to_owned(),
            )
            .await?;

        // Listing sorts by start date
        manager
            .create_index(
                Index::create()
                    .name("idx_trip_date_from")
                    .table(Trip::Table)
                    .col(Trip::DateFrom)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trip::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Trip {
    Table,
    IdTrip,
    Name,
    Description,
    DateFrom,
    DateTo,
    MaxPeople,
}
