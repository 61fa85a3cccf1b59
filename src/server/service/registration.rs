//! Trip registration workflow.
//!
//! Registering validates the payload and runs the precondition checks in a fixed order,
//! each with its own failure:
//!
//! 1. Pesel not used by any stored client (`DuplicatePesel`)
//! 2. Caller-supplied client not already on the trip (`AlreadyRegistered`)
//! 3. Trip exists and starts strictly in the future (`TripUnavailable`)
//!
//! The client insert and the registration insert then run in one transaction so a
//! failure of the second never leaves an orphan client behind.

use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::{client::ClientRepository, client_trip::ClientTripRepository, trip::TripRepository},
    error::{trip::TripError, AppError},
    model::client::{Client, CreateClientTripParams, RegisterClientParams},
};

pub struct TripRegistrationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TripRegistrationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new client to a trip.
    ///
    /// # Arguments
    /// - `id_trip` - Trip to register on
    /// - `params` - Client data, optional known client ID and optional payment date
    ///
    /// # Returns
    /// - `Ok(Client)` - The newly stored client
    /// - `Err(AppError::TripErr)` - Payload invalid or a precondition failed
    /// - `Err(AppError::DbErr)` - Store failure; nothing was persisted
    pub async fn register_client(
        &self,
        id_trip: i32,
        params: RegisterClientParams,
    ) -> Result<Client, AppError> {
        params.client.validate()?;

        let client_repo = ClientRepository::new(self.db);
        if client_repo.exists_by_pesel(&params.client.pesel).await? {
            return Err(TripError::DuplicatePesel.into());
        }

        if let Some(id_client) = params.existing_client_id {
            let client_trip_repo = ClientTripRepository::new(self.db);
            if client_trip_repo.exists(id_client, id_trip).await? {
                return Err(TripError::AlreadyRegistered.into());
            }
        }

        let now = Utc::now();
        let trip = TripRepository::new(self.db).find_by_id(id_trip).await?;
        match trip {
            Some(trip) if trip.date_from > now => {}
            _ => return Err(TripError::TripUnavailable.into()),
        }

        let txn = self.db.begin().await?;
        match Self::persist_registration(&txn, id_trip, params, now).await {
            Ok(client) => {
                txn.commit().await?;

                tracing::info!(
                    "Registered client {} on trip {}",
                    client.id_client,
                    id_trip
                );

                Ok(client)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!(
                        "Failed to roll back registration on trip {}: {}",
                        id_trip,
                        rollback_err
                    );
                }
                Err(err)
            }
        }
    }

    async fn persist_registration(
        txn: &DatabaseTransaction,
        id_trip: i32,
        params: RegisterClientParams,
        registered_at: DateTime<Utc>,
    ) -> Result<Client, AppError> {
        let client = ClientRepository::new(txn)
            .create(params.client)
            .await
            .map_err(pesel_conflict)?;

        ClientTripRepository::new(txn)
            .create(CreateClientTripParams {
                id_client: client.id_client,
                id_trip,
                registered_at,
                payment_date: params.payment_date,
            })
            .await?;

        Ok(client)
    }

    /// Removes a client that is not enrolled in any trip.
    ///
    /// # Returns
    /// - `Ok(())` - Client deleted
    /// - `Err(AppError::TripErr(ClientNotFound))` - No client with that ID
    /// - `Err(AppError::TripErr(ClientHasTrips))` - Client still has registrations
    pub async fn remove_client(&self, id_client: i32) -> Result<(), AppError> {
        let client_repo = ClientRepository::new(self.db);

        if client_repo.find_by_id(id_client).await?.is_none() {
            return Err(TripError::ClientNotFound.into());
        }

        let registrations = ClientTripRepository::new(self.db)
            .count_by_client(id_client)
            .await?;
        if registrations > 0 {
            return Err(TripError::ClientHasTrips.into());
        }

        // Gone between the lookup and the delete
        if !client_repo.delete(id_client).await? {
            return Err(TripError::ClientNotFound.into());
        }

        tracing::info!("Removed client {}", id_client);

        Ok(())
    }
}

/// Maps a unique violation from a concurrent registration with the same Pesel.
pub(super) fn pesel_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => TripError::DuplicatePesel.into(),
        _ => err.into(),
    }
}
