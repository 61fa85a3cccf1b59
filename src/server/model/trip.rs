//! Trip listing domain models and pagination parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::trip::{PaginatedTripsDto, TripClientDto, TripCountryDto, TripDto},
    server::error::AppError,
};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;
pub const MAX_PAGE: i64 = 1_000_000;

/// Validated one-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    /// Validates caller-supplied pagination values, falling back to the defaults for
    /// absent values.
    ///
    /// # Returns
    /// - `Ok(PageRequest)` - `1 <= page <= MAX_PAGE` and `1 <= page_size <= MAX_PAGE_SIZE`
    /// - `Err(AppError::BadRequest)` - Either value out of range
    pub fn new(page: Option<i64>, page_size: Option<i64>) -> Result<Self, AppError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE);

        if !(1..=MAX_PAGE).contains(&page) {
            return Err(AppError::BadRequest(format!(
                "page must be between 1 and {}",
                MAX_PAGE
            )));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(AppError::BadRequest(format!(
                "pageSize must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }

        Ok(Self {
            page: page as u64,
            page_size: page_size as u64,
        })
    }

    /// Zero-based page index as expected by the SeaORM paginator.
    pub fn page_index(&self) -> u64 {
        self.page - 1
    }

    /// Number of pages needed to show `total` rows.
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.page_size)
    }
}

/// Client enrolled in a trip, as shown in the listing.
#[derive(Debug, Clone, PartialEq)]
pub struct TripClient {
    pub first_name: String,
    pub last_name: String,
}

/// Trip with its destination country names and enrolled clients.
#[derive(Debug, Clone, PartialEq)]
pub struct TripListItem {
    pub id_trip: i32,
    pub name: String,
    pub description: String,
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
    pub max_people: i32,
    pub countries: Vec<String>,
    pub clients: Vec<TripClient>,
}

impl TripListItem {
    /// Converts a trip entity and its pre-fetched associations into a list item.
    pub fn from_entity(
        entity: entity::trip::Model,
        countries: Vec<String>,
        clients: Vec<TripClient>,
    ) -> Self {
        Self {
            id_trip: entity.id_trip,
            name: entity.name,
            description: entity.description,
            date_from: entity.date_from,
            date_to: entity.date_to,
            max_people: entity.max_people,
            countries,
            clients,
        }
    }

    pub fn into_dto(self) -> TripDto {
        TripDto {
            name: self.name,
            description: self.description,
            date_from: self.date_from,
            date_to: self.date_to,
            max_people: self.max_people,
            countries: self
                .countries
                .into_iter()
                .map(|name| TripCountryDto { name })
                .collect(),
            clients: self
                .clients
                .into_iter()
                .map(|c| TripClientDto {
                    first_name: c.first_name,
                    last_name: c.last_name,
                })
                .collect(),
        }
    }
}

/// One page of the trip listing.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedTrips {
    pub trips: Vec<TripListItem>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

impl PaginatedTrips {
    pub fn into_dto(self) -> PaginatedTripsDto {
        PaginatedTripsDto {
            page_num: self.page,
            page_size: self.page_size,
            all_pages: self.total_pages,
            trips: self.trips.into_iter().map(TripListItem::into_dto).collect(),
        }
    }
}
