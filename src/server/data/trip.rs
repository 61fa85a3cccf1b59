//! Trip data repository.
//!
//! Trips are maintained externally, so this repository only offers lookups and the
//! listing query.

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::trip::{TripClient, TripListItem};

pub struct TripRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TripRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id_trip: i32) -> Result<Option<entity::trip::Model>, DbErr> {
        entity::prelude::Trip::find_by_id(id_trip).one(self.db).await
    }

    /// Gets a page of trips with their destination countries and enrolled clients.
    ///
    /// Trips are ordered by start date, most recent first, with the trip ID as a
    /// tie-breaker so pages are stable across calls. Countries and clients for the whole
    /// page are fetched with one batched query each.
    ///
    /// # Arguments
    /// - `page` - Zero-based page index
    /// - `per_page` - Number of trips per page
    ///
    /// # Returns
    /// - `Ok((trips, total))` - The requested page and the total number of trips
    /// - `Err(DbErr)` - Database error during any of the queries
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<TripListItem>, u64), DbErr> {
        let paginator = entity::prelude::Trip::find()
            .order_by_desc(entity::trip::Column::DateFrom)
            .order_by_asc(entity::trip::Column::IdTrip)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let trips = paginator.fetch_page(page).await?;

        if trips.is_empty() {
            return Ok((Vec::new(), total));
        }

        let trip_ids: Vec<i32> = trips.iter().map(|t| t.id_trip).collect();

        let mut countries_map = self.get_country_names_by_trip(&trip_ids).await?;
        let mut clients_map = self.get_clients_by_trip(&trip_ids).await?;

        let items = trips
            .into_iter()
            .map(|trip| {
                let countries = countries_map.remove(&trip.id_trip).unwrap_or_default();
                let clients = clients_map.remove(&trip.id_trip).unwrap_or_default();
                TripListItem::from_entity(trip, countries, clients)
            })
            .collect();

        Ok((items, total))
    }

    /// Country names per trip, alphabetical within each trip.
    async fn get_country_names_by_trip(
        &self,
        trip_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<String>>, DbErr> {
        let rows = entity::prelude::CountryTrip::find()
            .filter(entity::country_trip::Column::IdTrip.is_in(trip_ids.to_vec()))
            .find_also_related(entity::prelude::Country)
            .order_by_asc(entity::country::Column::Name)
            .all(self.db)
            .await?;

        let mut map: HashMap<i32, Vec<String>> = HashMap::new();
        for (country_trip, country) in rows {
            if let Some(country) = country {
                map.entry(country_trip.id_trip)
                    .or_default()
                    .push(country.name);
            }
        }

        Ok(map)
    }

    /// Enrolled clients per trip, ordered by last then first name.
    async fn get_clients_by_trip(
        &self,
        trip_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<TripClient>>, DbErr> {
        let rows = entity::prelude::ClientTrip::find()
            .filter(entity::client_trip::Column::IdTrip.is_in(trip_ids.to_vec()))
            .find_also_related(entity::prelude::Client)
            .order_by_asc(entity::client::Column::LastName)
            .order_by_asc(entity::client::Column::FirstName)
            .all(self.db)
            .await?;

        let mut map: HashMap<i32, Vec<TripClient>> = HashMap::new();
        for (client_trip, client) in rows {
            if let Some(client) = client {
                map.entry(client_trip.id_trip).or_default().push(TripClient {
                    first_name: client.first_name,
                    last_name: client.last_name,
                });
            }
        }

        Ok(map)
    }
}
