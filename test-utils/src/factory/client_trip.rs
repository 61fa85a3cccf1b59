//! Factory for client-to-trip registrations.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating client-trip registrations with customizable timestamps.
pub struct ClientTripFactory<'a> {
    db: &'a DatabaseConnection,
    id_client: i32,
    id_trip: i32,
    registered_at: DateTime<Utc>,
    payment_date: Option<DateTime<Utc>>,
}

impl<'a> ClientTripFactory<'a> {
    /// Creates a new factory registering `id_client` on `id_trip` now, unpaid.
    pub fn new(db: &'a DatabaseConnection, id_client: i32, id_trip: i32) -> Self {
        Self {
            db,
            id_client,
            id_trip,
            registered_at: Utc::now(),
            payment_date: None,
        }
    }

    pub fn registered_at(mut self, registered_at: DateTime<Utc>) -> Self {
        self.registered_at = registered_at;
        self
    }

    pub fn payment_date(mut self, payment_date: Option<DateTime<Utc>>) -> Self {
        self.payment_date = payment_date;
        self
    }

    /// Builds and inserts the registration into the database.
    pub async fn build(self) -> Result<entity::client_trip::Model, DbErr> {
        entity::client_trip::ActiveModel {
            id_client: ActiveValue::Set(self.id_client),
            id_trip: ActiveValue::Set(self.id_trip),
            registered_at: ActiveValue::Set(self.registered_at),
            payment_date: ActiveValue::Set(self.payment_date),
        }
        .insert(self.db)
        .await
    }
}

/// Registers a client on a trip with default timestamps.
pub async fn create_client_trip(
    db: &DatabaseConnection,
    id_client: i32,
    id_trip: i32,
) -> Result<entity::client_trip::Model, DbErr> {
    ClientTripFactory::new(db, id_client, id_trip).build().await
}
