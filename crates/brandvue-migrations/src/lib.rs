//! Schema migrations for the BrandVue metadata store
//!
//! Every schema change is a migration unit under `migration/`, applied in
//! ascending name order by [`Migrator`]. The helper modules hold the DDL that
//! several units share: schema-qualified renames, system-versioned tables and
//! catalog seeding.

pub use sea_orm_migration::prelude::*;

pub mod ddl;
mod migration;
pub mod seed;
pub mod temporal;

pub use migration::Migrator;

/// Names of all migrations in the order they are applied
pub fn migration_names() -> Vec<String> {
    Migrator::migrations()
        .iter()
        .map(|migration| migration.name().to_string())
        .collect()
}
