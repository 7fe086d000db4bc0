pub use sea_orm_migration::prelude::*;

mod m20240115_000001_create_tables;
mod m20240115_000002_seed_api_scopes;

/// Crate version, reported by the `/version` endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240115_000001_create_tables::Migration),
            Box::new(m20240115_000002_seed_api_scopes::Migration),
        ]
    }
}
