//! Client-trip registration repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::client::CreateClientTripParams;

pub struct ClientTripRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClientTripRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a client's enrollment in a trip.
    pub async fn create(
        &self,
        params: CreateClientTripParams,
    ) -> Result<entity::client_trip::Model, DbErr> {
        entity::client_trip::ActiveModel {
            id_client: ActiveValue::Set(params.id_client),
            id_trip: ActiveValue::Set(params.id_trip),
            registered_at: ActiveValue::Set(params.registered_at),
            payment_date: ActiveValue::Set(params.payment_date),
        }
        .insert(self.db)
        .await
    }

    /// Checks whether the client is enrolled in the trip.
    pub async fn exists(&self, id_client: i32, id_trip: i32) -> Result<bool, DbErr> {
        let registration = entity::prelude::ClientTrip::find_by_id((id_client, id_trip))
            .one(self.db)
            .await?;

        Ok(registration.is_some())
    }

    /// Counts the trips a client is enrolled in.
    pub async fn count_by_client(&self, id_client: i32) -> Result<u64, DbErr> {
        entity::prelude::ClientTrip::find()
            .filter(entity::client_trip::Column::IdClient.eq(id_client))
            .count(self.db)
            .await
    }
}
