//! Schema-qualified DDL that the query builder does not render correctly for Postgres
//!
//! Postgres only accepts a bare name after `RENAME TO`, and index names live in
//! the schema of their table, so renames and drops outside `public` go through here.

use sea_orm_migration::prelude::*;

/// Postgres truncates longer identifiers to this many bytes (NAMEDATALEN - 1)
pub const MAX_IDENTIFIER_LENGTH: usize = 63;

/// Quote an identifier, preserving case
pub fn quote(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// `"schema"."name"`
pub fn qualified(schema: &str, name: &str) -> String {
    format!("{}.{}", quote(schema), quote(name))
}

/// Quote a string literal
pub fn literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

pub fn create_schema_sql(schema: &str) -> String {
    format!("CREATE SCHEMA IF NOT EXISTS {}", quote(schema))
}

pub fn drop_schema_sql(schema: &str) -> String {
    format!("DROP SCHEMA IF EXISTS {} CASCADE", quote(schema))
}

pub fn rename_table_sql(schema: &str, from: &str, to: &str) -> String {
    format!("ALTER TABLE {} RENAME TO {}", qualified(schema, from), quote(to))
}

pub fn rename_index_sql(schema: &str, from: &str, to: &str) -> String {
    format!("ALTER INDEX {} RENAME TO {}", qualified(schema, from), quote(to))
}

pub fn rename_constraint_sql(schema: &str, table: &str, from: &str, to: &str) -> String {
    format!(
        "ALTER TABLE {} RENAME CONSTRAINT {} TO {}",
        qualified(schema, table),
        quote(from),
        quote(to)
    )
}

pub fn drop_index_sql(schema: &str, name: &str) -> String {
    format!("DROP INDEX IF EXISTS {}", qualified(schema, name))
}

/// Move the identity sequence of `table.Id` past the highest stored id
///
/// Seed rows are inserted with explicit ids, which leaves the sequence behind.
pub fn sync_identity_sql(schema: &str, table: &str) -> String {
    let table_ref = qualified(schema, table);
    format!(
        "SELECT setval(pg_get_serial_sequence({}, 'Id'), COALESCE((SELECT MAX(\"Id\") FROM {}), 0) + 1, false)",
        literal(&table_ref),
        table_ref
    )
}

async fn run(manager: &SchemaManager<'_>, sql: String) -> Result<(), DbErr> {
    tracing::debug!(%sql, "executing ddl");
    manager.get_connection().execute_unprepared(&sql).await?;
    Ok(())
}

pub async fn create_schema(manager: &SchemaManager<'_>, schema: &str) -> Result<(), DbErr> {
    run(manager, create_schema_sql(schema)).await
}

pub async fn drop_schema(manager: &SchemaManager<'_>, schema: &str) -> Result<(), DbErr> {
    run(manager, drop_schema_sql(schema)).await
}

pub async fn rename_table(
    manager: &SchemaManager<'_>,
    schema: &str,
    from: &str,
    to: &str,
) -> Result<(), DbErr> {
    run(manager, rename_table_sql(schema, from, to)).await
}

pub async fn rename_index(
    manager: &SchemaManager<'_>,
    schema: &str,
    from: &str,
    to: &str,
) -> Result<(), DbErr> {
    run(manager, rename_index_sql(schema, from, to)).await
}

pub async fn rename_constraint(
    manager: &SchemaManager<'_>,
    schema: &str,
    table: &str,
    from: &str,
    to: &str,
) -> Result<(), DbErr> {
    run(manager, rename_constraint_sql(schema, table, from, to)).await
}

pub async fn drop_index(manager: &SchemaManager<'_>, schema: &str, name: &str) -> Result<(), DbErr> {
    run(manager, drop_index_sql(schema, name)).await
}

pub async fn sync_identity(
    manager: &SchemaManager<'_>,
    schema: &str,
    table: &str,
) -> Result<(), DbErr> {
    run(manager, sync_identity_sql(schema, table)).await
}
