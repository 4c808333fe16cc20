use super::database_config;
use brandvue_core::APPLICATION_SCHEMAS;
use brandvue_migrations::{ddl, migration_names, Migrator, MigratorTrait};
use clap::{Args, Subcommand};
use colored::Colorize;
use sea_orm::{ConnectionTrait, DatabaseConnection};
use std::collections::HashSet;
use tracing::{debug, info, warn};

#[derive(Args)]
pub struct MigrateCommand {
    /// Database connection URL
    #[arg(long, env = "BRANDVUE_DATABASE_URL")]
    pub database_url: String,

    #[command(subcommand)]
    pub action: MigrateAction,
}

#[derive(Subcommand)]
pub enum MigrateAction {
    /// Apply pending migrations
    Up {
        /// Apply at most this many; all pending when omitted
        #[arg(long)]
        steps: Option<u32>,
    },
    /// Revert applied migrations, newest first
    Down {
        #[arg(long, default_value_t = 1)]
        steps: u32,
    },
    /// List every migration with its state
    Status,
    /// Drop everything in the store and apply all migrations from scratch
    Fresh {
        /// Confirm that all data will be lost
        #[arg(long)]
        yes: bool,
    },
}

async fn print_status(db: &DatabaseConnection) -> anyhow::Result<()> {
    let applied: HashSet<String> = Migrator::get_applied_migrations(db)
        .await?
        .iter()
        .map(|m| m.name().to_string())
        .collect();

    let names = migration_names();
    for name in &names {
        if applied.contains(name) {
            println!("{} {}", "applied".bright_green(), name);
        } else {
            println!("{} {}", "pending".bright_yellow(), name.bright_white());
        }
    }

    let pending = names.len() - applied.len().min(names.len());
    println!();
    println!(
        "{} applied, {} pending",
        applied.len().to_string().bright_green().bold(),
        pending.to_string().bright_yellow().bold()
    );
    Ok(())
}

/// The runner's own reset only clears `public`
async fn drop_application_schemas(db: &DatabaseConnection) -> anyhow::Result<()> {
    for schema in APPLICATION_SCHEMAS.iter().filter(|s| **s != "public") {
        debug!(schema, "Dropping schema");
        db.execute_unprepared(&format!("DROP SCHEMA IF EXISTS {} CASCADE", ddl::quote(schema)))
            .await?;
    }
    Ok(())
}

impl MigrateCommand {
    pub fn execute(self) -> anyhow::Result<()> {
        let config = database_config(&self.database_url)?;

        debug!("Initializing database connection...");
        let rt = tokio::runtime::Runtime::new()?;
        let db = rt.block_on(brandvue_database::connect(&config))?;

        match self.action {
            MigrateAction::Up { steps } => {
                let pending = rt.block_on(Migrator::get_pending_migrations(&db))?;
                if pending.is_empty() {
                    println!("{}", "Nothing to apply".bright_white());
                    return Ok(());
                }
                info!(pending = pending.len(), ?steps, "Applying migrations");
                rt.block_on(Migrator::up(&db, steps))?;
                println!("{}", "✅ Migrations applied".bright_green());
            }
            MigrateAction::Down { steps } => {
                info!(steps, "Reverting migrations");
                rt.block_on(Migrator::down(&db, Some(steps)))?;
                println!("{}", "✅ Migrations reverted".bright_green());
            }
            MigrateAction::Status => rt.block_on(print_status(&db))?,
            MigrateAction::Fresh { yes } => {
                if !yes {
                    anyhow::bail!("migrate fresh drops every table; re-run with --yes to confirm");
                }
                warn!("Dropping all tables and re-applying every migration");
                rt.block_on(drop_application_schemas(&db))?;
                rt.block_on(Migrator::fresh(&db))?;
                println!("{}", "✅ Store rebuilt from scratch".bright_green());
            }
        }

        Ok(())
    }
}
