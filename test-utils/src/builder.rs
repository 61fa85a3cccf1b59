use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Assembles the schema of an in-memory SQLite database for a single test.
///
/// Most tests want the whole trips schema and call `with_trip_tables()`. Tests that need
/// a store failure, such as a missing registration table, pick tables one by one with
/// `with_table()`.
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(Country)
///     .with_table(Trip)
///     .with_table(Client)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the CREATE TABLE statement derived from `entity`.
    ///
    /// Statements run in the order they were queued, so referenced tables must come
    /// before the tables holding the foreign keys.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let statement = Schema::new(DbBackend::Sqlite).create_table_from_entity(entity);
        self.tables.push(statement);
        self
    }

    /// Queues every table of the trips schema: Country, Trip, Client, CountryTrip and
    /// ClientTrip.
    pub fn with_trip_tables(self) -> Self {
        self.with_table(Country)
            .with_table(Trip)
            .with_table(Client)
            .with_table(CountryTrip)
            .with_table(ClientTrip)
    }

    /// Connects to a fresh in-memory database and creates the queued tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context owning the connection
    /// - `Err(TestError::Database)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.with_tables(self.tables).await?;

        Ok(context)
    }
}
