//! SeaORM database migrations.

pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_districts;
mod m20250301_000002_create_assemblies;
mod m20250301_000003_create_local_body_types;
mod m20250301_000004_create_local_bodies;
mod m20250301_000005_create_wards;
mod m20250301_000006_create_ward_collection_rates;
mod m20250301_000007_create_towns;
mod m20250301_000008_create_issues;
mod m20250301_000009_create_category_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_districts::Migration),
            Box::new(m20250301_000002_create_assemblies::Migration),
            Box::new(m20250301_000003_create_local_body_types::Migration),
            Box::new(m20250301_000004_create_local_bodies::Migration),
            Box::new(m20250301_000005_create_wards::Migration),
            Box::new(m20250301_000006_create_ward_collection_rates::Migration),
            Box::new(m20250301_000007_create_towns::Migration),
            Box::new(m20250301_000008_create_issues::Migration),
            Box::new(m20250301_000009_create_category_tables::Migration),
        ]
    }
}
