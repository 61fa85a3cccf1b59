use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Owns the connection to one test's in-memory SQLite database.
///
/// The database disappears when the context is dropped, so tests never share rows.
#[derive(Default)]
pub struct TestContext {
    /// `None` until the first call to `database()`.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the connection, opening it on first use.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        let db = match self.db.take() {
            Some(db) => db,
            None => Database::connect(IN_MEMORY_URL).await?,
        };

        Ok(&*self.db.insert(db))
    }

    /// Runs the CREATE TABLE statements in order. Normally called from
    /// `TestBuilder::build()`.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}
