use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct TripCountryDto {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct TripClientDto {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct TripDto {
    pub name: String,
    pub description: String,
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
    pub max_people: i32,
    pub countries: Vec<TripCountryDto>,
    pub clients: Vec<TripClientDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedTripsDto {
    pub page_num: u64,
    pub page_size: u64,
    pub all_pages: u64,
    pub trips: Vec<TripDto>,
}
