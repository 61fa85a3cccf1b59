//! Client domain models and registration parameters.

use chrono::{DateTime, Utc};

use crate::{model::client::RegisterClientDto, server::error::trip::TripError};

const PESEL_LENGTH: usize = 11;
const MAX_NAME_LENGTH: usize = 100;
const MAX_EMAIL_LENGTH: usize = 100;
const MAX_TELEPHONE_LENGTH: usize = 15;

/// Stored client record.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id_client: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub telephone: String,
    pub pesel: String,
}

impl Client {
    /// Converts an entity model to a client domain model at the repository boundary.
    pub fn from_entity(entity: entity::client::Model) -> Self {
        Self {
            id_client: entity.id_client,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            telephone: entity.telephone,
            pesel: entity.pesel,
        }
    }
}

/// Column values for inserting a new client. The identifier is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateClientParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub telephone: String,
    pub pesel: String,
}

impl CreateClientParams {
    /// Checks field presence, column limits and the Pesel format.
    ///
    /// # Returns
    /// - `Ok(())` - All fields are storable
    /// - `Err(TripError::InvalidClient)` - Reason naming the first offending field
    pub fn validate(&self) -> Result<(), TripError> {
        let fields = [
            ("First name", &self.first_name, MAX_NAME_LENGTH),
            ("Last name", &self.last_name, MAX_NAME_LENGTH),
            ("Email", &self.email, MAX_EMAIL_LENGTH),
            ("Telephone", &self.telephone, MAX_TELEPHONE_LENGTH),
        ];

        for (label, value, max) in fields {
            if value.trim().is_empty() {
                return Err(TripError::InvalidClient(format!("{} is required.", label)));
            }
            if value.chars().count() > max {
                return Err(TripError::InvalidClient(format!(
                    "{} must be at most {} characters.",
                    label, max
                )));
            }
        }

        if self.pesel.len() != PESEL_LENGTH || !self.pesel.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TripError::InvalidClient(format!(
                "PESEL must consist of exactly {} digits.",
                PESEL_LENGTH
            )));
        }

        Ok(())
    }
}

/// Parameters for registering a new client to a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterClientParams {
    /// Caller-supplied identifier of a known client, used only for the duplicate
    /// registration check.
    pub existing_client_id: Option<i32>,
    pub client: CreateClientParams,
    pub payment_date: Option<DateTime<Utc>>,
}

impl RegisterClientParams {
    /// Converts the request payload. Non-positive client IDs are treated as absent and
    /// the payment date is taken from the first entry of `clientTrips`.
    pub fn from_dto(dto: RegisterClientDto) -> Self {
        Self {
            existing_client_id: dto.id_client.filter(|id| *id > 0),
            payment_date: dto.client_trips.first().and_then(|ct| ct.payment_date),
            client: CreateClientParams {
                first_name: dto.first_name,
                last_name: dto.last_name,
                email: dto.email,
                telephone: dto.telephone,
                pesel: dto.pesel,
            },
        }
    }
}

/// Column values for a new client-trip registration.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateClientTripParams {
    pub id_client: i32,
    pub id_trip: i32,
    pub registered_at: DateTime<Utc>,
    pub payment_date: Option<DateTime<Utc>>,
}
