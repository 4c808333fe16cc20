use crate::seed::{self, FeatureSeed};
use brandvue_core::FeatureCode;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const FEATURES: [FeatureSeed; 2] = [
    FeatureSeed::new(4, "LLM insights", FeatureCode::LlmInsights, true),
    FeatureSeed::new(5, "Table builder", FeatureCode::TableBuilder, true),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        seed::insert_features(manager, &FEATURES).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        seed::delete_features(manager, &FEATURES).await
    }
}
