use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20240601_000002_create_trip_table::Trip, m20240601_000003_create_client_table::Client,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClientTrip::Table)
                    .if_not_exists()
                    .col(integer(ClientTrip::IdClient))
                    .col(integer(ClientTrip::IdTrip))
                    .col(timestamp_with_time_zone(ClientTrip::RegisteredAt))
                    .col(timestamp_with_time_zone_null(ClientTrip::PaymentDate))
                    .primary_key(
                        Index::create()
                            .col(ClientTrip::IdClient)
                            .col(ClientTrip::IdTrip),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_client_trip_client")
                            .from(ClientTrip::Table, ClientTrip::IdClient)
                            .to(Client::Table, Client::IdClient)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_client_trip_trip")
                            .from(ClientTrip::Table, ClientTrip::IdTrip)
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
            .drop_table(Table::drop().table(ClientTrip::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClientTrip {
    Table,
    IdClient,
    IdTrip,
    RegisteredAt,
    PaymentDate,
}
