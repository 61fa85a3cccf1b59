//! Client data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::client::{Client, CreateClientParams};

pub struct ClientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClientRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new client; the identifier is assigned by the store.
    ///
    /// # Returns
    /// - `Ok(Client)` - The stored client including its new identifier
    /// - `Err(DbErr)` - Insert failed, including unique Pesel violations
    pub async fn create(&self, params: CreateClientParams) -> Result<Client, DbErr> {
        let entity = entity::client::ActiveModel {
            id_client: ActiveValue::NotSet,
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email),
            telephone: ActiveValue::Set(params.telephone),
            pesel: ActiveValue::Set(params.pesel),
        }
        .insert(self.db)
        .await?;

        Ok(Client::from_entity(entity))
    }

    pub async fn find_by_id(&self, id_client: i32) -> Result<Option<Client>, DbErr> {
        let entity = entity::prelude::Client::find_by_id(id_client)
            .one(self.db)
            .await?;

        Ok(entity.map(Client::from_entity))
    }

    /// Checks whether any client already uses the given Pesel.
    pub async fn exists_by_pesel(&self, pesel: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Client::find()
            .filter(entity::client::Column::Pesel.eq(pesel))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a client by ID.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No client with that ID
    pub async fn delete(&self, id_client: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Client::delete_by_id(id_client)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
