//! brandvue-meta - schema management for the BrandVue metadata store

mod commands;

use clap::{Parser, Subcommand};
use commands::{MigrateCommand, SchemaCommand};
use tracing_subscriber::{layer::SubscriberExt, Layer};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "BRANDVUE_LOG_LEVEL", global = true)]
    log_level: String,

    /// Log format: compact, full
    #[arg(
        long,
        default_value = "compact",
        env = "BRANDVUE_LOG_FORMAT",
        global = true
    )]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply, revert or inspect migrations
    Migrate(MigrateCommand),
    /// Inspect the physical schema
    Schema(SchemaCommand),
}

fn init_tracing(log_level: &str, log_format: &str) -> anyhow::Result<()> {
    // RUST_LOG takes over completely when set
    let filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .map_err(|e| anyhow::anyhow!("Invalid RUST_LOG environment variable: {}", e))?
    } else {
        tracing_subscriber::EnvFilter::try_new(format!(
            "brandvue_cli={level},\
             brandvue_core={level},\
             brandvue_database={level},\
             brandvue_migrations={level},\
             sea_orm_migration={level},\
             sea_orm=warn,\
             sqlx=warn",
            level = log_level
        ))
        .map_err(|e| anyhow::anyhow!("Invalid log level '{}': {}", log_level, e))?
    };

    let fmt_layer = match log_format {
        "full" => tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .boxed(),
        _ => tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .boxed(),
    };

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global default subscriber: {}", e))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level, &cli.log_format)?;

    match cli.command {
        Commands::Migrate(cmd) => cmd.execute(),
        Commands::Schema(cmd) => cmd.execute(),
    }
}
