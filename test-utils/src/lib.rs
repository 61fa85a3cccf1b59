//! Trips API Test Utils
//!
//! Shared testing utilities for the trips backend. Provides a builder for test contexts
//! backed by an in-memory SQLite database and factories for inserting trips, clients,
//! countries and their associations with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn registers_client() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let trip = factory::trip::create_trip(db).await?;
//!     let client = factory::client::create_client(db).await?;
//!     factory::client_trip::create_client_trip(db, client.id_client, trip.id_trip).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
