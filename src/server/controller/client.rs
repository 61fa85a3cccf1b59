use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::api::ErrorDto,
    server::{
        controller::TRIP_TAG, error::AppError, service::registration::TripRegistrationService,
        state::AppState,
    },
};

/// Delete a client that is not enrolled in any trip.
///
/// # Returns
/// - `204 No Content` - Client deleted
/// - `400 Bad Request` - Client still enrolled in at least one trip
/// - `404 Not Found` - No client with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/trips/clients/{id_client}",
    tag = TRIP_TAG,
    params(
        ("id_client" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 204, description = "Client deleted"),
        (status = 400, description = "Client is assigned to a trip", body = String, content_type = "text/plain"),
        (status = 404, description = "Client not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id_client): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    TripRegistrationService::new(&state.db)
        .remove_client(id_client)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
