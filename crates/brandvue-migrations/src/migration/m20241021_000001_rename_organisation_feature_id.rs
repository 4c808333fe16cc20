use crate::ddl;
use sea_orm_migration::prelude::*;

/// `OrganisationFeatures.FeaturesId` becomes `FeatureId`, matching `UserFeatures`
#[derive(DeriveMigrationName)]
pub struct Migration;

const OLD_FK: &str = "FK_OrganisationFeatures_Features_FeaturesId";
const NEW_FK: &str = "FK_OrganisationFeatures_Features_FeatureId";
const OLD_INDEX: &str = "IX_OrganisationFeatures_FeaturesId_OrganisationId";
const NEW_INDEX: &str = "IX_OrganisationFeatures_FeatureId_OrganisationId";

fn rename_column(from: &str, to: &str) -> TableAlterStatement {
    Table::alter()
        .table(Alias::new("OrganisationFeatures"))
        .rename_column(Alias::new(from), Alias::new(to))
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(rename_column("FeaturesId", "FeatureId"))
            .await?;
        ddl::rename_constraint(manager, "public", "OrganisationFeatures", OLD_FK, NEW_FK).await?;
        ddl::rename_index(manager, "public", OLD_INDEX, NEW_INDEX).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        ddl::rename_index(manager, "public", NEW_INDEX, OLD_INDEX).await?;
        ddl::rename_constraint(manager, "public", "OrganisationFeatures", NEW_FK, OLD_FK).await?;
        manager
            .alter_table(rename_column("FeatureId", "FeaturesId"))
            .await
    }
}
