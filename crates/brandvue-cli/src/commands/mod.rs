pub mod migrate;
pub mod schema;

pub use migrate::MigrateCommand;
pub use schema::SchemaCommand;

use brandvue_core::{DatabaseConfig, DATABASE_URL_ENV};

/// Pool settings come from the environment; the URL from the command line wins
pub(crate) fn database_config(database_url: &str) -> anyhow::Result<DatabaseConfig> {
    let config = DatabaseConfig::from_lookup(|key| {
        if key == DATABASE_URL_ENV {
            Some(database_url.to_string())
        } else {
            std::env::var(key).ok()
        }
    })?;
    Ok(config)
}
