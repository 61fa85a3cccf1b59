pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_country_table;
mod m20240601_000002_create_trip_table;
mod m20240601_000003_create_client_table;
mod m20240601_000004_create_country_trip_table;
mod m20240601_000005_create_client_trip_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_country_table::Migration),
            Box::new(m20240601_000002_create_trip_table::Migration),
            Box::new(m20240601_000003_create_client_table::Migration),
            Box::new(m20240601_000004_create_country_trip_table::Migration),
            Box::new(m20240601_000005_create_client_trip_table::Migration),
        ]
    }
}
