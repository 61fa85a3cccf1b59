//! HTTP request handlers.
//!
//! Controllers convert DTOs into server parameters, call the service layer and convert
//! the results back into DTOs. Every handler is annotated with `#[utoipa::path]` so the
//! router can assemble the OpenAPI document from them.

pub mod client;
pub mod trip;

#[cfg(test)]
mod test;

/// Tag for grouping trip endpoints in OpenAPI documentation
pub static TRIP_TAG: &str = "trip";
