use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Client payload accepted when registering a client to a trip.
///
/// Keys are camelCase; PascalCase spellings are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterClientDto {
    /// Identifier of an already known client. Only used to detect a duplicate
    /// registration; the stored client always receives a fresh identifier.
    #[serde(default, alias = "IdClient")]
    pub id_client: Option<i32>,
    #[serde(alias = "FirstName")]
    pub first_name: String,
    #[serde(alias = "LastName")]
    pub last_name: String,
    #[serde(alias = "Email")]
    pub email: String,
    #[serde(alias = "Telephone")]
    pub telephone: String,
    #[serde(alias = "Pesel")]
    pub pesel: String,
    #[serde(default, alias = "ClientTrips")]
    pub client_trips: Vec<ClientTripPaymentDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientTripPaymentDto {
    #[serde(default, alias = "PaymentDate")]
    pub payment_date: Option<DateTime<Utc>>,
}
