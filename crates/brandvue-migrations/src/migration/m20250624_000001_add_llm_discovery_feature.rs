use crate::seed::{self, FeatureSeed};
use brandvue_core::FeatureCode;
use sea_orm_migration::prelude::*;

/// Registered switched off until the discovery experience is released
#[derive(DeriveMigrationName)]
pub struct Migration;

const FEATURES: [FeatureSeed; 1] = [FeatureSeed::new(
    6,
    "LLM discovery",
    FeatureCode::LlmDiscovery,
    false,
)];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        seed::insert_features(manager, &FEATURES).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        seed::delete_features(manager, &FEATURES).await
    }
}
