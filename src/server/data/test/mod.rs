mod client;
mod client_trip;
mod trip;
