use sea_orm::DatabaseConnection;

use crate::server::{
    data::trip::TripRepository,
    error::AppError,
    model::trip::{PageRequest, PaginatedTrips},
};

pub struct TripService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TripService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of trips, most recent start date first.
    ///
    /// `total_pages` is computed from the count of all trips, so it does not depend on
    /// which page was requested.
    pub async fn get_paginated(&self, request: PageRequest) -> Result<PaginatedTrips, AppError> {
        let repo = TripRepository::new(self.db);

        let (trips, total) = repo
            .get_paginated(request.page_index(), request.page_size)
            .await?;

        Ok(PaginatedTrips {
            trips,
            total,
            page: request.page,
            page_size: request.page_size,
            total_pages: request.total_pages(total),
        })
    }
}
