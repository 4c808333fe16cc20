use sea_orm_migration::{prelude::*, schema::*};

/// Plan/target weighting tree and the per-response weights generated from it
///
/// A plan weights one variable; each of its targets may carry child plans,
/// so plans and targets reference each other.
#[derive(DeriveMigrationName)]
pub struct Migration;

const CONTEXT_TARGET_INDEX: &str = r#"CREATE UNIQUE INDEX "IX_ResponseWeightingContexts_WeightingTargetId"
    ON "ResponseWeightingContexts" ("WeightingTargetId")
    INCLUDE ("Id", "ProductShortCode", "SubProductId", "Context", "SubsetId")
    WHERE "WeightingTargetId" IS NOT NULL"#;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("WeightingPlans"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(string_len(Alias::new("ProductShortCode"), 20))
                    .col(string_len_null(Alias::new("SubProductId"), 256))
                    .col(string_len_null(Alias::new("SubsetId"), 256))
                    .col(string_len(Alias::new("VariableIdentifier"), 256))
                    .col(boolean(Alias::new("IsWeightingGroupRoot")).default(false))
                    .col(integer_null(Alias::new("ParentWeightingTargetId")))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Alias::new("WeightingTargets"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(string_len(Alias::new("ProductShortCode"), 20))
                    .col(string_len_null(Alias::new("SubProductId"), 256))
                    .col(string_len_null(Alias::new("SubsetId"), 256))
                    .col(integer_null(Alias::new("EntityInstanceId")))
                    .col(decimal_len_null(Alias::new("Target"), 20, 10))
                    .col(integer_null(Alias::new("TargetPopulation")))
                    .col(integer(Alias::new("ParentWeightingPlanId")))
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_WeightingTargets_WeightingPlans_ParentWeightingPlanId")
                            .from(Alias::new("WeightingTargets"), Alias::new("ParentWeightingPlanId"))
                            .to(Alias::new("WeightingPlans"), Alias::new("Id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Closes the cycle; deleting a target does not cascade into its child plans
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("FK_WeightingPlans_WeightingTargets_ParentWeightingTargetId")
                    .from(Alias::new("WeightingPlans"), Alias::new("ParentWeightingTargetId"))
                    .to(Alias::new("WeightingTargets"), Alias::new("Id"))
                    .on_delete(ForeignKeyAction::NoAction)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_WeightingPlans_Scope_ParentTargetId_VariableIdentifier")
                    .table(Alias::new("WeightingPlans"))
                    .col(Alias::new("ProductShortCode"))
                    .col(Alias::new("SubProductId"))
                    .col(Alias::new("SubsetId"))
                    .col(Alias::new("ParentWeightingTargetId"))
                    .col(Alias::new("VariableIdentifier"))
                    .unique()
                    .nulls_not_distinct()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_WeightingPlans_ParentWeightingTargetId")
                    .table(Alias::new("WeightingPlans"))
                    .col(Alias::new("ParentWeightingTargetId"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_WeightingTargets_Scope_ParentPlanId_EntityInstanceId")
                    .table(Alias::new("WeightingTargets"))
                    .col(Alias::new("ProductShortCode"))
                    .col(Alias::new("SubProductId"))
                    .col(Alias::new("SubsetId"))
                    .col(Alias::new("ParentWeightingPlanId"))
                    .col(Alias::new("EntityInstanceId"))
                    .unique()
                    .nulls_not_distinct()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_WeightingTargets_ParentWeightingPlanId")
                    .table(Alias::new("WeightingTargets"))
                    .col(Alias::new("ParentWeightingPlanId"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Alias::new("ResponseWeightingContexts"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(string_len(Alias::new("ProductShortCode"), 20))
                    .col(string_len_null(Alias::new("SubProductId"), 256))
                    .col(string_len(Alias::new("SubsetId"), 256))
                    .col(text(Alias::new("Context")))
                    .col(integer_null(Alias::new("WeightingTargetId")))
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_ResponseWeightingContexts_WeightingTargets_WeightingTargetId")
                            .from(Alias::new("ResponseWeightingContexts"), Alias::new("WeightingTargetId"))
                            .to(Alias::new("WeightingTargets"), Alias::new("Id"))
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one context per target; contexts without a target are unconstrained
        manager
            .get_connection()
            .execute_unprepared(CONTEXT_TARGET_INDEX)
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Alias::new("ResponseWeights"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(integer(Alias::new("RespondentId")))
                    .col(decimal_len(Alias::new("Weight"), 20, 10))
                    .col(integer(Alias::new("ResponseWeightingContextId")))
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_ResponseWeights_ResponseWeightingContexts_ContextId")
                            .from(Alias::new("ResponseWeights"), Alias::new("ResponseWeightingContextId"))
                            .to(Alias::new("ResponseWeightingContexts"), Alias::new("Id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_ResponseWeights_ResponseWeightingContextId")
                    .table(Alias::new("ResponseWeights"))
                    .col(Alias::new("ResponseWeightingContextId"))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("ResponseWeights")).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(Alias::new("ResponseWeightingContexts"))
                    .if_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name("FK_WeightingPlans_WeightingTargets_ParentWeightingTargetId")
                    .table(Alias::new("WeightingPlans"))
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Alias::new("WeightingTargets")).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Alias::new("WeightingPlans")).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
