pub mod prelude;

pub mod client;
pub mod client_trip;
pub mod country;
pub mod country_trip;
pub mod trip;
