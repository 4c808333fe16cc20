use crate::seed::{self, FeatureSeed};
use brandvue_core::FeatureCode;
use sea_orm_migration::{prelude::*, schema::*};

/// Feature catalog with organisation- and user-level overrides
#[derive(DeriveMigrationName)]
pub struct Migration;

const FEATURES: [FeatureSeed; 3] = [
    FeatureSeed::new(1, "User management", FeatureCode::UserManagement, true),
    FeatureSeed::new(2, "Data export", FeatureCode::DataExport, true),
    FeatureSeed::new(3, "Over time data", FeatureCode::OvertimeData, true),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("Features"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(string_len(Alias::new("Name"), 256))
                    .col(string_len(Alias::new("FeatureCode"), 100))
                    .col(boolean(Alias::new("IsActive")).default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_Features_FeatureCode")
                    .table(Alias::new("Features"))
                    .col(Alias::new("FeatureCode"))
                    .unique()
                    .to_owned(),
            )
            .await?;

        // The key column was originally pluralised; renamed later
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("OrganisationFeatures"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(integer(Alias::new("FeaturesId")))
                    .col(string_len(Alias::new("OrganisationId"), 450))
                    .col(string_len(Alias::new("UpdatedByUserId"), 450))
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_OrganisationFeatures_Features_FeaturesId")
                            .from(Alias::new("OrganisationFeatures"), Alias::new("FeaturesId"))
                            .to(Alias::new("Features"), Alias::new("Id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_OrganisationFeatures_FeaturesId_OrganisationId")
                    .table(Alias::new("OrganisationFeatures"))
                    .col(Alias::new("FeaturesId"))
                    .col(Alias::new("OrganisationId"))
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Alias::new("UserFeatures"))
                    .if_not_exists()
                    .col(pk_auto(Alias::new("Id")))
                    .col(integer(Alias::new("FeatureId")))
                    .col(string_len(Alias::new("UserId"), 450))
                    .col(string_len(Alias::new("UpdatedByUserId"), 450))
                    .col(timestamp(Alias::new("UpdatedDate")).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("FK_UserFeatures_Features_FeatureId")
                            .from(Alias::new("UserFeatures"), Alias::new("FeatureId"))
                            .to(Alias::new("Features"), Alias::new("Id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_UserFeatures_FeatureId_UserId")
                    .table(Alias::new("UserFeatures"))
                    .col(Alias::new("FeatureId"))
                    .col(Alias::new("UserId"))
                    .unique()
                    .to_owned(),
            )
            .await?;

        seed::insert_features(manager, &FEATURES).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in ["UserFeatures", "OrganisationFeatures", "Features"] {
            manager
                .drop_table(Table::drop().table(Alias::new(table)).if_exists().to_owned())
                .await?;
        }
        Ok(())
    }
}
