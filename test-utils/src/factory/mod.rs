//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let trip = factory::trip::TripFactory::new(&db)
//!     .name("Alps")
//!     .date_from(Utc::now() - Duration::days(1))
//!     .build()
//!     .await?;
//! let client = factory::create_client(&db).await?;
//! ```

pub mod client;
pub mod client_trip;
pub mod country;
pub mod country_trip;
pub mod helpers;
pub mod trip;

pub use client::create_client;
pub use client_trip::create_client_trip;
pub use country::create_country;
pub use country_trip::create_country_trip;
pub use trip::create_trip;
