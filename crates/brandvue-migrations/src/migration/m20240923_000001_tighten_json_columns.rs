//! Tighten the JSON-as-text columns
//!
//! Collections that the application always deserialises become NOT NULL with an
//! empty-collection default, and small per-subset maps get a bounded length.
//! Entity-set average mappings whose parent or child set no longer exists are
//! deleted so both ends can be enforced by foreign keys. Down restores the
//! column shapes but not the deleted mappings.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const MAPPINGS: &str = "EntitySetAverageMappingConfigurations";
const PARENT_FK: &str =
    "FK_EntitySetAvgMapping_EntitySetConfigs_ParentEntitySetId";
const CHILD_FK: &str =
    "FK_EntitySetAvgMapping_EntitySetConfigs_ChildEntitySetId";
const CHILD_INDEX: &str = "IX_EntitySetAverageMappingConfigurations_ChildEntitySetId";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(PARENT_FK)
                    .table(Alias::new(MAPPINGS))
                    .to_owned(),
            )
            .await?;

        // Backfill before NOT NULL
        db.execute_unprepared(
            r#"
            UPDATE "Reports"."SavedReports" SET "DefaultFilters" = '[]' WHERE "DefaultFilters" IS NULL;
            UPDATE "EntityInstanceConfigurations" SET "EnabledBySubset" = '{}' WHERE "EnabledBySubset" IS NULL;
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            ALTER TABLE "Reports"."SavedReports"
                ALTER COLUMN "DefaultFilters" SET DEFAULT '[]',
                ALTER COLUMN "DefaultFilters" SET NOT NULL;

            ALTER TABLE "EntityInstanceConfigurations"
                ALTER COLUMN "EnabledBySubset" TYPE varchar(4000),
                ALTER COLUMN "EnabledBySubset" SET DEFAULT '{}',
                ALTER COLUMN "EnabledBySubset" SET NOT NULL,
                ALTER COLUMN "StartDateBySubset" TYPE varchar(4000);

            ALTER TABLE "SubsetConfigurations"
                ALTER COLUMN "SurveyIdToAllowedSegmentNames" TYPE varchar(4000);

            ALTER TABLE "EntityTypeConfigurations"
                ALTER COLUMN "SurveyChoiceSetNames" TYPE varchar(4000);

            ALTER TABLE "Averages"
                ALTER COLUMN "SubsetIds" SET DEFAULT '[]';

            ALTER TABLE "Parts" ALTER COLUMN "AverageType" TYPE varchar(256);
            ALTER TABLE "Parts_History" ALTER COLUMN "AverageType" TYPE varchar(256);
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            DELETE FROM "EntitySetAverageMappingConfigurations" m
            WHERE NOT EXISTS (SELECT 1 FROM "EntitySetConfigurations" es WHERE es."Id" = m."ParentEntitySetId")
               OR NOT EXISTS (SELECT 1 FROM "EntitySetConfigurations" es WHERE es."Id" = m."ChildEntitySetId")
            "#,
        )
        .await?;

        manager
            .create_index(
                Index::create()
                    .name(CHILD_INDEX)
                    .table(Alias::new(MAPPINGS))
                    .col(Alias::new("ChildEntitySetId"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(CHILD_FK)
                    .from(Alias::new(MAPPINGS), Alias::new("ChildEntitySetId"))
                    .to(Alias::new("EntitySetConfigurations"), Alias::new("Id"))
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        // Only one of the two paths may cascade
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(PARENT_FK)
                    .from(Alias::new(MAPPINGS), Alias::new("ParentEntitySetId"))
                    .to(Alias::new("EntitySetConfigurations"), Alias::new("Id"))
                    .on_delete(ForeignKeyAction::NoAction)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [CHILD_FK, PARENT_FK] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(name)
                        .table(Alias::new(MAPPINGS))
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(CHILD_INDEX)
                    .table(Alias::new(MAPPINGS))
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE "Reports"."SavedReports"
                    ALTER COLUMN "DefaultFilters" DROP NOT NULL,
                    ALTER COLUMN "DefaultFilters" DROP DEFAULT;

                ALTER TABLE "EntityInstanceConfigurations"
                    ALTER COLUMN "EnabledBySubset" TYPE text,
                    ALTER COLUMN "EnabledBySubset" DROP NOT NULL,
                    ALTER COLUMN "EnabledBySubset" DROP DEFAULT,
                    ALTER COLUMN "StartDateBySubset" TYPE text;

                ALTER TABLE "SubsetConfigurations"
                    ALTER COLUMN "SurveyIdToAllowedSegmentNames" TYPE text;

                ALTER TABLE "EntityTypeConfigurations"
                    ALTER COLUMN "SurveyChoiceSetNames" TYPE text;

                ALTER TABLE "Averages"
                    ALTER COLUMN "SubsetIds" DROP DEFAULT;

                ALTER TABLE "Parts" ALTER COLUMN "AverageType" TYPE text;
                ALTER TABLE "Parts_History" ALTER COLUMN "AverageType" TYPE text;
                "#,
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(PARENT_FK)
                    .from(Alias::new(MAPPINGS), Alias::new("ParentEntitySetId"))
                    .to(Alias::new("EntitySetConfigurations"), Alias::new("Id"))
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
