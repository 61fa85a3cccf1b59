pub use super::client::Entity as Client;
pub use super::client_trip::Entity as ClientTrip;
pub use super::country::Entity as Country;
pub use super::country_trip::Entity as CountryTrip;
pub use super::trip::Entity as Trip;
