use super::m20250218_000001_organisation_features_history::ORGANISATION_FEATURES;
use crate::temporal;
use sea_orm_migration::prelude::*;

/// Expose the start of the current period as `UpdatedDate`
///
/// The live column is computed from `SysStartTime`; history stores the value
/// it had when the row version was archived.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        temporal::disable_system_versioning(
            manager,
            &ORGANISATION_FEATURES,
            temporal::HistoryRetention::Keep,
        )
        .await?;

        // Existing history rows take their archived period start
        temporal::add_versioned_column(
            manager,
            &ORGANISATION_FEATURES,
            "UpdatedDate",
            &temporal::updated_date_definition(),
            "timestamp(0)",
        )
        .await?;
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                UPDATE "OrganisationFeatures_History" SET "UpdatedDate" = "SysStartTime";
                ALTER TABLE "OrganisationFeatures_History" ALTER COLUMN "UpdatedDate" SET NOT NULL;
                "#,
            )
            .await?;

        temporal::resume_system_versioning(manager, &ORGANISATION_FEATURES).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        temporal::disable_system_versioning(
            manager,
            &ORGANISATION_FEATURES,
            temporal::HistoryRetention::Keep,
        )
        .await?;
        temporal::drop_versioned_column(manager, &ORGANISATION_FEATURES, "UpdatedDate").await?;
        temporal::resume_system_versioning(manager, &ORGANISATION_FEATURES).await
    }
}
