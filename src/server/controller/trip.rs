use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, client::RegisterClientDto, trip::PaginatedTripsDto},
    server::{
        controller::TRIP_TAG,
        error::{trip::TripError, AppError},
        model::{client::RegisterClientParams, trip::PageRequest},
        service::{registration::TripRegistrationService, trip::TripService},
        state::AppState,
    },
};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPageQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// Get a page of trips.
///
/// Trips are ordered by start date, most recent first. Each trip lists its destination
/// countries and the clients enrolled in it.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Pagination parameters (`page` and `pageSize`)
///
/// # Returns
/// - `200 OK` - Requested page with the total page count
/// - `400 Bad Request` - Pagination values missing their bounds or not integers
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/trips",
    tag = TRIP_TAG,
    params(
        ("page" = Option<i64>, Query, description = "One-based page number (default: 1)"),
        ("pageSize" = Option<i64>, Query, description = "Trips per page, at most 100 (default: 10)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved trips", body = PaginatedTripsDto),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trips(
    State(state): State<AppState>,
    query: Result<Query<TripPageQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let request = PageRequest::new(query.page, query.page_size)?;

    let page = TripService::new(&state.db).get_paginated(request).await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Register a new client to a trip.
///
/// Stores the client and its enrollment in one transaction. The optional `idClient`
/// only identifies a known client for the duplicate registration check; the stored
/// client always receives a fresh identifier.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id_trip` - Trip to register on
/// - `payload` - Client data with an optional payment date
///
/// # Returns
/// - `200 OK` - Client registered
/// - `400 Bad Request` - Plain-text reason: malformed or invalid client data, Pesel already used,
///   client already on the trip, or trip missing or already started
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/trips/{id_trip}/clients",
    tag = TRIP_TAG,
    params(
        ("id_trip" = i32, Path, description = "Trip ID")
    ),
    request_body = RegisterClientDto,
    responses(
        (status = 200, description = "Client registered"),
        (status = 400, description = "Registration rejected", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_client(
    State(state): State<AppState>,
    Path(id_trip): Path<i32>,
    payload: Result<Json<RegisterClientDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) =
        payload.map_err(|rejection| TripError::InvalidClient(rejection.body_text()))?;
    let params = RegisterClientParams::from_dto(payload);

    TripRegistrationService::new(&state.db)
        .register_client(id_trip, params)
        .await?;

    Ok(StatusCode::OK)
}
