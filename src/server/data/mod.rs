//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return
//! domain models so the service layer never touches entity types. Each repository is
//! generic over `ConnectionTrait`, so the same methods run on the connection pool or
//! inside a `DatabaseTransaction`.

pub mod client;
pub mod client_trip;
pub mod trip;

#[cfg(test)]
mod test;
