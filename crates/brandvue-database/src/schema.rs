//! Schema inventory
//!
//! A [`SchemaSnapshot`] is the catalog view of the application schemas: tables,
//! columns, indexes, constraints, triggers and routines. Columns are keyed by
//! name, not position, so a column dropped and re-added compares equal when its
//! shape is the same. The migration bookkeeping table is left out.

use brandvue_core::APPLICATION_SCHEMAS;
use sea_orm::{ConnectionTrait, DbBackend, DbErr, QueryResult, Statement};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;
use tracing::debug;

const MIGRATIONS_TABLE: &str = "seaql_migrations";

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Catalog query failed: {0}")]
    Query(#[from] DbErr),

    #[error("Failed to serialise snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSnapshot {
    pub data_type: String,
    pub max_length: Option<i32>,
    pub numeric_precision: Option<i32>,
    pub numeric_scale: Option<i32>,
    pub nullable: bool,
    pub default: Option<String>,
    pub generated: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub columns: BTreeMap<String, ColumnSnapshot>,
    /// Index name to `CREATE INDEX` definition
    pub indexes: BTreeMap<String, String>,
    /// Constraint name to `pg_get_constraintdef` output
    pub constraints: BTreeMap<String, String>,
    pub triggers: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaSnapshot {
    pub schemas: BTreeSet<String>,
    /// Keyed by `schema.table`
    pub tables: BTreeMap<String, TableSnapshot>,
    /// Functions and procedures as `schema.name(args)`
    pub routines: BTreeSet<String>,
}

fn schema_list() -> String {
    APPLICATION_SCHEMAS
        .iter()
        .map(|schema| format!("'{}'", schema))
        .collect::<Vec<_>>()
        .join(", ")
}

fn table_key(schema: &str, table: &str) -> String {
    format!("{}.{}", schema, table)
}

async fn query<C: ConnectionTrait>(db: &C, sql: String) -> Result<Vec<QueryResult>, DbErr> {
    db.query_all(Statement::from_string(DbBackend::Postgres, sql))
        .await
}

impl SchemaSnapshot {
    /// Read the current inventory from the catalog
    pub async fn capture<C: ConnectionTrait>(db: &C) -> Result<Self, SchemaError> {
        let schemas = schema_list();
        let mut snapshot = SchemaSnapshot::default();

        for row in query(
            db,
            format!(
                "SELECT nspname::text AS name FROM pg_namespace WHERE nspname IN ({})",
                schemas
            ),
        )
        .await?
        {
            snapshot.schemas.insert(row.try_get("", "name")?);
        }

        for row in query(
            db,
            format!(
                "SELECT table_schema::text AS table_schema, table_name::text AS table_name
                 FROM information_schema.tables
                 WHERE table_schema IN ({}) AND table_type = 'BASE TABLE' AND table_name <> '{}'",
                schemas, MIGRATIONS_TABLE
            ),
        )
        .await?
        {
            let schema: String = row.try_get("", "table_schema")?;
            let table: String = row.try_get("", "table_name")?;
            snapshot.tables.insert(table_key(&schema, &table), TableSnapshot::default());
        }

        for row in query(
            db,
            format!(
                "SELECT table_schema::text AS table_schema,
                        table_name::text AS table_name,
                        column_name::text AS column_name,
                        data_type::text AS data_type,
                        character_maximum_length::int4 AS max_length,
                        numeric_precision::int4 AS numeric_precision,
                        numeric_scale::int4 AS numeric_scale,
                        (is_nullable = 'YES') AS nullable,
                        column_default::text AS column_default,
                        generation_expression::text AS generation_expression
                 FROM information_schema.columns
                 WHERE table_schema IN ({})",
                schemas
            ),
        )
        .await?
        {
            let schema: String = row.try_get("", "table_schema")?;
            let table: String = row.try_get("", "table_name")?;
            let Some(entry) = snapshot.tables.get_mut(&table_key(&schema, &table)) else {
                continue;
            };
            let generated: Option<String> = row.try_get("", "generation_expression")?;
            entry.columns.insert(
                row.try_get("", "column_name")?,
                ColumnSnapshot {
                    data_type: row.try_get("", "data_type")?,
                    max_length: row.try_get("", "max_length")?,
                    numeric_precision: row.try_get("", "numeric_precision")?,
                    numeric_scale: row.try_get("", "numeric_scale")?,
                    nullable: row.try_get("", "nullable")?,
                    default: row.try_get("", "column_default")?,
                    generated: generated.filter(|expr| !expr.is_empty()),
                },
            );
        }

        for row in query(
            db,
            format!(
                "SELECT schemaname::text AS schemaname, tablename::text AS tablename,
                        indexname::text AS indexname, indexdef
                 FROM pg_indexes WHERE schemaname IN ({})",
                schemas
            ),
        )
        .await?
        {
            let schema: String = row.try_get("", "schemaname")?;
            let table: String = row.try_get("", "tablename")?;
            if let Some(entry) = snapshot.tables.get_mut(&table_key(&schema, &table)) {
                entry
                    .indexes
                    .insert(row.try_get("", "indexname")?, row.try_get("", "indexdef")?);
            }
        }

        // NOT NULL constraints are covered by the column view
        for row in query(
            db,
            format!(
                "SELECT n.nspname::text AS schema_name, t.relname::text AS table_name,
                        c.conname::text AS name, pg_get_constraintdef(c.oid) AS definition
                 FROM pg_constraint c
                 JOIN pg_class t ON t.oid = c.conrelid
                 JOIN pg_namespace n ON n.oid = t.relnamespace
                 WHERE n.nspname IN ({}) AND c.contype IN ('p', 'u', 'f', 'c')",
                schemas
            ),
        )
        .await?
        {
            let schema: String = row.try_get("", "schema_name")?;
            let table: String = row.try_get("", "table_name")?;
            if let Some(entry) = snapshot.tables.get_mut(&table_key(&schema, &table)) {
                entry
                    .constraints
                    .insert(row.try_get("", "name")?, row.try_get("", "definition")?);
            }
        }

        for row in query(
            db,
            format!(
                "SELECT n.nspname::text AS schema_name, t.relname::text AS table_name,
                        tg.tgname::text AS name
                 FROM pg_trigger tg
                 JOIN pg_class t ON t.oid = tg.tgrelid
                 JOIN pg_namespace n ON n.oid = t.relnamespace
                 WHERE n.nspname IN ({}) AND NOT tg.tgisinternal",
                schemas
            ),
        )
        .await?
        {
            let schema: String = row.try_get("", "schema_name")?;
            let table: String = row.try_get("", "table_name")?;
            if let Some(entry) = snapshot.tables.get_mut(&table_key(&schema, &table)) {
                entry.triggers.insert(row.try_get("", "name")?);
            }
        }

        for row in query(
            db,
            format!(
                "SELECT n.nspname::text AS schema_name, p.proname::text AS name,
                        pg_get_function_identity_arguments(p.oid) AS args
                 FROM pg_proc p
                 JOIN pg_namespace n ON n.oid = p.pronamespace
                 WHERE n.nspname IN ({})",
                schemas
            ),
        )
        .await?
        {
            let schema: String = row.try_get("", "schema_name")?;
            let name: String = row.try_get("", "name")?;
            let args: String = row.try_get("", "args")?;
            snapshot.routines.insert(format!("{}.{}({})", schema, name, args));
        }

        debug!(
            tables = snapshot.tables.len(),
            routines = snapshot.routines.len(),
            "Captured schema snapshot"
        );
        Ok(snapshot)
    }

    pub fn table(&self, schema: &str, table: &str) -> Option<&TableSnapshot> {
        self.tables.get(&table_key(schema, table))
    }

    pub fn table_names(&self) -> BTreeSet<String> {
        self.tables.keys().cloned().collect()
    }

    pub fn to_json(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Differences from `self` to `other`, one line each
    pub fn diff(&self, other: &SchemaSnapshot) -> Vec<String> {
        let mut changes = Vec::new();
        diff_sets("schema", "", &self.schemas, &other.schemas, &mut changes);
        diff_sets("routine", "", &self.routines, &other.routines, &mut changes);

        for (name, before) in &self.tables {
            match other.tables.get(name) {
                None => changes.push(format!("- table {}", name)),
                Some(after) => diff_table(name, before, after, &mut changes),
            }
        }
        for name in other.tables.keys() {
            if !self.tables.contains_key(name) {
                changes.push(format!("+ table {}", name));
            }
        }
        changes
    }
}

fn diff_sets(
    kind: &str,
    owner: &str,
    before: &BTreeSet<String>,
    after: &BTreeSet<String>,
    changes: &mut Vec<String>,
) {
    for removed in before.difference(after) {
        changes.push(format!("- {} {}{}", kind, owner, removed));
    }
    for added in after.difference(before) {
        changes.push(format!("+ {} {}{}", kind, owner, added));
    }
}

fn diff_maps<V: PartialEq + std::fmt::Debug>(
    kind: &str,
    table: &str,
    before: &BTreeMap<String, V>,
    after: &BTreeMap<String, V>,
    changes: &mut Vec<String>,
) {
    for (name, old) in before {
        match after.get(name) {
            None => changes.push(format!("- {} {}.{}", kind, table, name)),
            Some(new) if new != old => {
                changes.push(format!("~ {} {}.{}: {:?} -> {:?}", kind, table, name, old, new))
            }
            Some(_) => {}
        }
    }
    for name in after.keys() {
        if !before.contains_key(name) {
            changes.push(format!("+ {} {}.{}", kind, table, name));
        }
    }
}

fn diff_table(name: &str, before: &TableSnapshot, after: &TableSnapshot, changes: &mut Vec<String>) {
    diff_maps("column", name, &before.columns, &after.columns, changes);
    diff_maps("index", name, &before.indexes, &after.indexes, changes);
    diff_maps("constraint", name, &before.constraints, &after.constraints, changes);
    diff_sets("trigger", &format!("{}.", name), &before.triggers, &after.triggers, changes);
}
