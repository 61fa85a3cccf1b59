use crate::server::{data::client_trip::ClientTripRepository, model::client::CreateClientTripParams};
use chrono::{Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_by_client;
mod create;
mod exists;
