//! Database connection management

use brandvue_core::{DatabaseConfig, StoreError, StoreResult};
use brandvue_migrations::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use tracing::{debug, info};

pub type DbConnection = DatabaseConnection;

/// Open a pool without touching the schema
pub async fn connect(config: &DatabaseConfig) -> StoreResult<DbConnection> {
    let mut opt = ConnectOptions::new(config.url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .sqlx_logging(false);

    debug!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Connecting to metadata store"
    );

    Database::connect(opt)
        .await
        .map_err(|e| StoreError::Connection(e.to_string()))
}

/// Open a pool and bring the schema up to the latest migration
pub async fn establish_connection(config: &DatabaseConfig) -> StoreResult<Arc<DbConnection>> {
    let db = connect(config).await?;

    let pending = Migrator::get_pending_migrations(&db)
        .await
        .map_err(|e| StoreError::Migration(e.to_string()))?;
    if pending.is_empty() {
        debug!("Metadata store schema is up to date");
    } else {
        info!(count = pending.len(), "Applying pending migrations");
    }

    Migrator::up(&db, None)
        .await
        .map_err(|e| StoreError::Migration(e.to_string()))?;

    Ok(Arc::new(db))
}
