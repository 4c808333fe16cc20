use crate::seed;
use brandvue_core::FeatureCode;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        seed::set_feature_active(manager, FeatureCode::LlmDiscovery, true).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        seed::set_feature_active(manager, FeatureCode::LlmDiscovery, false).await
    }
}
