//! Factory linking a destination country to a trip.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Links a country to a trip.
///
/// # Arguments
/// - `db` - Database connection
/// - `id_country` - Country ID
/// - `id_trip` - Trip ID
pub async fn create_country_trip(
    db: &DatabaseConnection,
    id_country: i32,
    id_trip: i32,
) -> Result<entity::country_trip::Model, DbErr> {
    entity::country_trip::ActiveModel {
        id_country: ActiveValue::Set(id_country),
        id_trip: ActiveValue::Set(id_trip),
    }
    .insert(db)
    .await
}
