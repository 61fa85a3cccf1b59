//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce the
//! registration rules, own transaction boundaries and assemble domain models for the
//! controllers to convert into DTOs.

pub mod registration;
pub mod trip;

#[cfg(test)]
mod test;
