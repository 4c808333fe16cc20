use sea_orm_migration::prelude::*;

/// Procedures that restore versioned configuration to a point in time
#[derive(DeriveMigrationName)]
pub struct Migration;

const ROLL_BACK_METRICS: &str = include_str!("../../sql/RollBackMetricsConfiguration.sql");
const ROLL_BACK_PAGES: &str = include_str!("../../sql/RollBackPagesConfiguration.sql");

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(ROLL_BACK_METRICS).await?;
        db.execute_unprepared(ROLL_BACK_PAGES).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP PROCEDURE IF EXISTS "RollBackPagesConfiguration"(varchar, varchar, timestamp);
                DROP PROCEDURE IF EXISTS "RollBackMetricsConfiguration"(varchar, varchar, timestamp);
                "#,
            )
            .await?;
        Ok(())
    }
}
