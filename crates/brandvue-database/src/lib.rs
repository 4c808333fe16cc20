//! Database connection and schema inventory utilities

pub use sea_orm;
mod connection;
pub mod schema;

pub use connection::{connect, establish_connection, DbConnection};
pub use schema::{SchemaError, SchemaSnapshot};

// Export test utilities for use by other crates in their tests
pub mod test_utils;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestDatabase;
    use brandvue_core::DatabaseConfig;
    use sea_orm::ConnectionTrait;

    #[tokio::test]
    async fn test_establish_connection_with_migrations() -> anyhow::Result<()> {
        let test_db = TestDatabase::new().await?;
        let config = DatabaseConfig::new(&test_db.database_url);

        let db = establish_connection(&config).await?;

        let applied = db
            .query_one(sea_orm::Statement::from_string(
                sea_orm::DatabaseBackend::Postgres,
                "SELECT count(*)::int4 AS applied FROM seaql_migrations".to_owned(),
            ))
            .await?
            .ok_or_else(|| anyhow::anyhow!("no row"))?
            .try_get::<i32>("", "applied")?;
        assert_eq!(applied as usize, brandvue_migrations::migration_names().len());

        // A second start finds nothing pending
        let again = establish_connection(&config).await?;
        let snapshot_first = SchemaSnapshot::capture(db.as_ref()).await?;
        let snapshot_second = SchemaSnapshot::capture(again.as_ref()).await?;
        assert_eq!(snapshot_first, snapshot_second);

        Ok(())
    }
}
