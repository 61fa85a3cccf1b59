use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240601_000001_create_country_table::Country, m20240601_000002_create_trip_table::Trip,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CountryTrip::Table)
                    .if_not_exists()
                    .col(integer(CountryTrip::IdCountry))
                    .col(integer(CountryTrip::IdTrip))
                    .primary_key(
                        Index::create()
                            .col(CountryTrip::IdCountry)
                            .col(CountryTrip::IdTrip),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_country_trip_country")
                            .from(CountryTrip::Table, CountryTrip::IdCountry)
                            .to(Country::Table, Country::IdCountry)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_country_trip_trip")
                            .from(CountryTrip::Table, CountryTrip::IdTrip)
                            .to(Trip::Table, Trip::IdTrip)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CountryTrip::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CountryTrip {
    Table,
    IdCountry,
    IdTrip,
}
