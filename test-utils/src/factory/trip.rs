//! Trip factory for creating test trip entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test trips with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let trip = TripFactory::new(&db)
///     .name("Past trip")
///     .date_from(Utc::now() - Duration::days(3))
///     .build()
///     .await?;
/// ```
pub struct TripFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    date_from: DateTime<Utc>,
    date_to: DateTime<Utc>,
    max_people: i32,
}

impl<'a> TripFactory<'a> {
    /// Creates a new TripFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Trip {id}"`
    /// - description: `"Test trip description"`
    /// - date_from: 30 days from now
    /// - date_to: 37 days from now
    /// - max_people: `20`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let date_from = Utc::now() + Duration::days(30);
        Self {
            db,
            name: format!("Trip {}", id),
            description: "Test trip description".to_string(),
            date_from,
            date_to: date_from + Duration::days(7),
            max_people: 20,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the start date. The end date is moved along to stay a week after it.
    pub fn date_from(mut self, date_from: DateTime<Utc>) -> Self {
        self.date_from = date_from;
        self.date_to = date_from + Duration::days(7);
        self
    }

    pub fn date_to(mut self, date_to: DateTime<Utc>) -> Self {
        self.date_to = date_to;
        self
    }

    pub fn max_people(mut self, max_people: i32) -> Self {
        self.max_people = max_people;
        self
    }

    /// Builds and inserts the trip entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::trip::Model)` - Created trip entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::trip::Model, DbErr> {
        entity::trip::ActiveModel {
            id_trip: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            date_from: ActiveValue::Set(self.date_from),
            date_to: ActiveValue::Set(self.date_to),
            max_people: ActiveValue::Set(self.max_people),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a trip starting 30 days from now.
pub async fn create_trip(db: &DatabaseConnection) -> Result<entity::trip::Model, DbErr> {
    TripFactory::new(db).build().await
}
