//! API data transfer objects shared by the HTTP surface.
//!
//! These types define the JSON wire format of the trips API. Server-side domain
//! models convert into and out of them at the controller boundary.

pub mod api;
pub mod client;
pub mod trip;
