use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const RENAME_SURVEY_GROUP: &str = include_str!("../../sql/renameSurveyGroup.sql");

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(RENAME_SURVEY_GROUP)
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(r#"DROP PROCEDURE IF EXISTS "renameSurveyGroup"(varchar, varchar)"#)
            .await?;
        Ok(())
    }
}
