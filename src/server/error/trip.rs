use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Rejections of the trip registration workflow.
///
/// Every variant maps to a fixed status code and a plain-text reason so clients can rely
/// on both.
#[derive(Error, Debug, PartialEq)]
pub enum TripError {
    /// Client payload failed field validation.
    #[error("{0}")]
    InvalidClient(String),

    /// A client with the same Pesel is already stored.
    #[error("Client with this PESEL already exists.")]
    DuplicatePesel,

    /// The client is already enrolled in the trip.
    #[error("Client is already registered for this trip.")]
    AlreadyRegistered,

    /// Trip does not exist or its start date is not in the future.
    #[error("Trip does not exist or has already started.")]
    TripUnavailable,

    /// No client with the requested ID.
    #[error("Client not found.")]
    ClientNotFound,

    /// Client is still enrolled in at least one trip.
    #[error("Client cannot be deleted because they are assigned to a trip.")]
    ClientHasTrips,
}

impl TripError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ClientNotFound => StatusCode::NOT_FOUND,
            Self::InvalidClient(_)
            | Self::DuplicatePesel
            | Self::AlreadyRegistered
            | Self::TripUnavailable
            | Self::ClientHasTrips => StatusCode::BAD_REQUEST,
        }
    }
}

/// Converts trip errors into plain-text HTTP responses.
///
/// # Returns
/// - 404 Not Found - For `ClientNotFound`
/// - 400 Bad Request - For every other variant
impl IntoResponse for TripError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected trip request: {}", self);

        (self.status_code(), self.to_string()).into_response()
    }
}
