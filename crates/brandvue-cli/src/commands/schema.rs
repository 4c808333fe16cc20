use super::database_config;
use brandvue_database::SchemaSnapshot;
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Args)]
pub struct SchemaCommand {
    /// Database connection URL
    #[arg(long, env = "BRANDVUE_DATABASE_URL")]
    pub database_url: String,

    #[command(subcommand)]
    pub action: SchemaAction,
}

#[derive(Subcommand)]
pub enum SchemaAction {
    /// Dump tables, columns, indexes, constraints and routines as JSON
    Snapshot {
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

impl SchemaCommand {
    pub fn execute(self) -> anyhow::Result<()> {
        let config = database_config(&self.database_url)?;

        debug!("Initializing database connection...");
        let rt = tokio::runtime::Runtime::new()?;
        let db = rt.block_on(brandvue_database::connect(&config))?;

        match self.action {
            SchemaAction::Snapshot { output } => {
                let snapshot = rt.block_on(SchemaSnapshot::capture(&db))?;
                let json = snapshot.to_json()?;
                match output {
                    Some(path) => {
                        std::fs::write(&path, json)?;
                        info!(tables = snapshot.tables.len(), path = %path.display(), "Wrote schema snapshot");
                        println!(
                            "{} {}",
                            "Snapshot written to".bright_white(),
                            path.display().to_string().bright_cyan()
                        );
                    }
                    None => println!("{}", json),
                }
            }
        }

        Ok(())
    }
}
