//! Client factory for creating test client entities.

use crate::factory::helpers::{next_id, next_pesel};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clients with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let client = ClientFactory::new(&db)
///     .first_name("Jan")
///     .pesel("85010112345")
///     .build()
///     .await?;
/// ```
pub struct ClientFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
    telephone: String,
    pesel: String,
}

impl<'a> ClientFactory<'a> {
    /// Creates a new ClientFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"First {id}"`
    /// - last_name: `"Last {id}"`
    /// - email: `"client{id}@example.com"`
    /// - telephone: `"+48 600 000 000"`
    /// - pesel: unique 11 digit value
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("First {}", id),
            last_name: format!("Last {}", id),
            email: format!("client{}@example.com", id),
            telephone: "+48 600 000 000".to_string(),
            pesel: next_pesel(),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn pesel(mut self, pesel: impl Into<String>) -> Self {
        self.pesel = pesel.into();
        self
    }

    /// Builds and inserts the client entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::client::Model)` - Created client entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::client::Model, DbErr> {
        entity::client::ActiveModel {
            id_client: ActiveValue::NotSet,
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            telephone: ActiveValue::Set(self.telephone),
            pesel: ActiveValue::Set(self.pesel),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a client with default values.
pub async fn create_client(db: &DatabaseConnection) -> Result<entity::client::Model, DbErr> {
    ClientFactory::new(db).build().await
}
