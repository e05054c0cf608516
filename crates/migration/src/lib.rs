//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20220101_000011_create_habitat;
mod m20220101_000012_create_species;
mod m20220101_000013_create_zoo;
mod m20220101_000014_create_animal;
mod m20220101_000015_create_employee;
mod m20220101_000002_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220101_000011_create_habitat::Migration),
            Box::new(m20220101_000012_create_species::Migration),
            Box::new(m20220101_000013_create_zoo::Migration),
            Box::new(m20220101_000014_create_animal::Migration),
            Box::new(m20220101_000015_create_employee::Migration),
            // Indexes should always be applied last
            Box::new(m20220101_000002_add_indexes::Migration),
        ]
    }
}
