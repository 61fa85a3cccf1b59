//! Country factory for creating test country entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a country with the given name.
pub async fn create_country_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::country::Model, DbErr> {
    entity::country::ActiveModel {
        id_country: ActiveValue::NotSet,
        name: ActiveValue::Set(name.into()),
    }
    .insert(db)
    .await
}

/// Creates a country named `"Country {id}"`.
pub async fn create_country(db: &DatabaseConnection) -> Result<entity::country::Model, DbErr> {
    create_country_named(db, format!("Country {}", next_id())).await
}
