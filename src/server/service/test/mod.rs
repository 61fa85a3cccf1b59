use crate::server::{
    error::{trip::TripError, AppError},
    model::{
        client::{CreateClientParams, RegisterClientParams},
        trip::PageRequest,
    },
    service::{registration::TripRegistrationService, trip::TripService},
};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};


fn registration(pesel: &str) -> RegisterClientParams {
    RegisterClientParams {
        existing_client_id: None,
        client: CreateClientParams {
            first_name: "Jan".to_string(),
            last_name: "Kowalski".to_string(),
            email: "jan@example.com".to_string(),
            telephone: "+48 600 100 200".to_string(),
            pesel: pesel.to_string(),
        },
        payment_date: None,
    }
}
