//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values across factories within a test binary.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a unique, well-formed 11 digit Pesel.
pub fn next_pesel() -> String {
    format!("{:011}", 90_000_000_000u64 + next_id())
}

/// Creates a future trip with one client registered on it.
///
/// # Returns
/// - `Ok((trip, client, client_trip))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_trip_with_client(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::trip::Model,
        entity::client::Model,
        entity::client_trip::Model,
    ),
    DbErr,
> {
    let trip = crate::factory::trip::create_trip(db).await?;
    let client = crate::factory::client::create_client(db).await?;
    let client_trip =
        crate::factory::client_trip::create_client_trip(db, client.id_client, trip.id_trip)
            .await?;

    Ok((trip, client, client_trip))
}
