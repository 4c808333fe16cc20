//! System-versioned tables
//!
//! A versioned table carries a `SysStartTime`/`SysEndTime` period and a history
//! table with the same columns in the same order. A row trigger copies the
//! previous version of a row into history on every UPDATE and DELETE and stamps
//! the period of the new version. The history table carries no constraints and
//! no generated expressions, so columns computed from the period (`UpdatedDate`)
//! are stored as plain values there.

use crate::ddl::{literal, qualified, quote};
use brandvue_core::PERIOD_END_MAX;
use sea_orm_migration::prelude::*;

pub const PERIOD_START: &str = "SysStartTime";
pub const PERIOD_END: &str = "SysEndTime";

const NOW_UTC: &str = "(now() at time zone 'utc')";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemporalTable {
    pub schema: &'static str,
    pub table: &'static str,
    pub history_table: &'static str,
}

/// What happens to the history table when versioning is removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryRetention {
    Keep,
    Drop,
}

impl TemporalTable {
    pub const fn new(schema: &'static str, table: &'static str, history_table: &'static str) -> Self {
        Self {
            schema,
            table,
            history_table,
        }
    }

    pub fn live(&self) -> String {
        qualified(self.schema, self.table)
    }

    pub fn history(&self) -> String {
        qualified(self.schema, self.history_table)
    }

    fn function_name(&self) -> String {
        format!("{}_versioning", self.table)
    }

    fn trigger_name(&self) -> String {
        format!("{}_versioning_trigger", self.table)
    }

    fn period_index_name(&self) -> String {
        format!("ix_{}", self.history_table)
    }

    fn function(&self) -> String {
        qualified(self.schema, &self.function_name())
    }

    /// Period columns on the live table; existing rows start their period now
    pub fn add_period_sql(&self) -> Vec<String> {
        vec![
            format!(
                "ALTER TABLE {} ADD COLUMN IF NOT EXISTS {} timestamp NOT NULL DEFAULT {}",
                self.live(),
                quote(PERIOD_START),
                NOW_UTC
            ),
            format!(
                "ALTER TABLE {} ADD COLUMN IF NOT EXISTS {} timestamp NOT NULL DEFAULT {}",
                self.live(),
                quote(PERIOD_END),
                literal(PERIOD_END_MAX)
            ),
        ]
    }

    pub fn drop_period_sql(&self) -> String {
        format!(
            "ALTER TABLE {} DROP COLUMN IF EXISTS {}, DROP COLUMN IF EXISTS {}",
            self.live(),
            quote(PERIOD_START),
            quote(PERIOD_END)
        )
    }

    pub fn create_history_sql(&self) -> Vec<String> {
        vec![
            format!(
                "CREATE TABLE IF NOT EXISTS {} (LIKE {})",
                self.history(),
                self.live()
            ),
            format!(
                "CREATE INDEX IF NOT EXISTS {} ON {} ({}, {})",
                quote(&self.period_index_name()),
                self.history(),
                quote(PERIOD_END),
                quote(PERIOD_START)
            ),
        ]
    }

    pub fn install_trigger_sql(&self) -> Vec<String> {
        let function = format!(
            r#"CREATE OR REPLACE FUNCTION {function}() RETURNS trigger AS $$
BEGIN
    IF TG_OP IN ('UPDATE', 'DELETE') THEN
        OLD.{end} := {now};
        INSERT INTO {history} SELECT (OLD).*;
    END IF;
    IF TG_OP = 'DELETE' THEN
        RETURN OLD;
    END IF;
    NEW.{start} := {now};
    NEW.{end} := {max};
    RETURN NEW;
END;
$$ LANGUAGE plpgsql"#,
            function = self.function(),
            history = self.history(),
            start = quote(PERIOD_START),
            end = quote(PERIOD_END),
            now = NOW_UTC,
            max = literal(PERIOD_END_MAX),
        );

        vec![
            function,
            format!(
                "DROP TRIGGER IF EXISTS {} ON {}",
                quote(&self.trigger_name()),
                self.live()
            ),
            format!(
                "CREATE TRIGGER {} BEFORE INSERT OR UPDATE OR DELETE ON {} FOR EACH ROW EXECUTE FUNCTION {}()",
                quote(&self.trigger_name()),
                self.live(),
                self.function()
            ),
        ]
    }

    pub fn remove_trigger_sql(&self) -> Vec<String> {
        vec![
            format!(
                "DROP TRIGGER IF EXISTS {} ON {}",
                quote(&self.trigger_name()),
                self.live()
            ),
            format!("DROP FUNCTION IF EXISTS {}()", self.function()),
        ]
    }

    pub fn drop_history_sql(&self) -> String {
        format!("DROP TABLE IF EXISTS {}", self.history())
    }
}

async fn run_all(manager: &SchemaManager<'_>, statements: Vec<String>) -> Result<(), DbErr> {
    let db = manager.get_connection();
    for sql in statements {
        db.execute_unprepared(&sql).await?;
    }
    Ok(())
}

/// Turn an existing table into a versioned table, keeping its rows
pub async fn enable_system_versioning(
    manager: &SchemaManager<'_>,
    table: &TemporalTable,
) -> Result<(), DbErr> {
    tracing::info!(table = %table.live(), history = %table.history(), "enabling system versioning");
    let mut statements = table.add_period_sql();
    statements.extend(table.create_history_sql());
    statements.extend(table.install_trigger_sql());
    run_all(manager, statements).await
}

/// Stop recording history; the period columns stay on the live table
pub async fn disable_system_versioning(
    manager: &SchemaManager<'_>,
    table: &TemporalTable,
    retention: HistoryRetention,
) -> Result<(), DbErr> {
    tracing::info!(table = %table.live(), ?retention, "disabling system versioning");
    let mut statements = table.remove_trigger_sql();
    if retention == HistoryRetention::Drop {
        statements.push(table.drop_history_sql());
    }
    run_all(manager, statements).await
}

/// Undo `enable_system_versioning` completely: trigger, history and period columns
pub async fn drop_system_versioning(
    manager: &SchemaManager<'_>,
    table: &TemporalTable,
) -> Result<(), DbErr> {
    disable_system_versioning(manager, table, HistoryRetention::Drop).await?;
    run_all(manager, vec![table.drop_period_sql()]).await
}

/// Reinstall the trigger, e.g. after the column layout of the history table changed
pub async fn resume_system_versioning(
    manager: &SchemaManager<'_>,
    table: &TemporalTable,
) -> Result<(), DbErr> {
    run_all(manager, table.install_trigger_sql()).await
}

/// Add a column to both the live and history table
///
/// `live_definition` is the full column definition on the live table (which may
/// be a generated column); history always receives `history_type` as a plain column.
pub async fn add_versioned_column(
    manager: &SchemaManager<'_>,
    table: &TemporalTable,
    column: &str,
    live_definition: &str,
    history_type: &str,
) -> Result<(), DbErr> {
    run_all(
        manager,
        vec![
            format!(
                "ALTER TABLE {} ADD COLUMN {} {}",
                table.live(),
                quote(column),
                live_definition
            ),
            format!(
                "ALTER TABLE {} ADD COLUMN {} {}",
                table.history(),
                quote(column),
                history_type
            ),
        ],
    )
    .await
}

pub async fn drop_versioned_column(
    manager: &SchemaManager<'_>,
    table: &TemporalTable,
    column: &str,
) -> Result<(), DbErr> {
    run_all(
        manager,
        vec![
            format!("ALTER TABLE {} DROP COLUMN {}", table.live(), quote(column)),
            format!("ALTER TABLE {} DROP COLUMN {}", table.history(), quote(column)),
        ],
    )
    .await
}

/// Rename a versioned table and its history table, moving the trigger along
pub async fn rename_versioned_table(
    manager: &SchemaManager<'_>,
    from: &TemporalTable,
    to: &TemporalTable,
) -> Result<(), DbErr> {
    tracing::info!(from = %from.live(), to = %to.live(), "renaming versioned table");
    let mut statements = from.remove_trigger_sql();
    if from.table != to.table {
        statements.push(format!(
            "ALTER TABLE {} RENAME TO {}",
            from.live(),
            quote(to.table)
        ));
    }
    if from.history_table != to.history_table {
        statements.push(format!(
            "ALTER TABLE {} RENAME TO {}",
            from.history(),
            quote(to.history_table)
        ));
        statements.push(format!(
            "ALTER INDEX {} RENAME TO {}",
            qualified(from.schema, &from.period_index_name()),
            quote(&to.period_index_name())
        ));
    }
    statements.extend(to.install_trigger_sql());
    run_all(manager, statements).await
}

/// `UpdatedDate` on versioned tables mirrors the start of the current period
pub fn updated_date_definition() -> String {
    format!(
        "timestamp GENERATED ALWAYS AS ({}) STORED",
        quote(PERIOD_START)
    )
}
